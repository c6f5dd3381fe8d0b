extern crate tello_udp;

use tello_udp::{Result, Tello};

#[tokio::main]
async fn main() {
    fly().await.unwrap();
}

async fn fly() -> Result<()> {
    let drone = Tello::new().await?;

    drone.connect().await?;
    drone.recv_response().await?;

    drone.take_off().await?;
    drone.recv_response().await?;

    for direction in ['l', 'r', 'f', 'b'] {
        drone.flip(direction).await?;
        drone.recv_response().await?;
    }

    drone.land().await?;
    drone.recv_response().await?;

    Ok(())
}
