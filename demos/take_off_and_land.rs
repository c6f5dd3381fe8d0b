extern crate tello_udp;

use tokio::time::{sleep, Duration};

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

    sleep(Duration::from_secs(5)).await;

    drone.land().await?;
    drone.recv_response().await?;

    Ok(())
}
