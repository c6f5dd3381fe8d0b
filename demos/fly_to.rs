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

    // a small square, one meter up
    drone.up(100).await?;
    drone.recv_response().await?;

    drone.fly_to(100, 0, 0, 50).await?;
    drone.recv_response().await?;

    drone.fly_to(0, 100, 0, 50).await?;
    drone.recv_response().await?;

    drone.fly_to(-100, 0, 0, 50).await?;
    drone.recv_response().await?;

    drone.fly_to(0, -100, 0, 50).await?;
    drone.recv_response().await?;

    drone.land().await?;
    drone.recv_response().await?;

    Ok(())
}
