use std::time::Duration;

use log::{info, warn};
use tokio::net::UdpSocket;

const SERVER_ADDR: &str = "10.0.0.1:44444";

const MSG_TX: &str = "Hello World from CC3000";
const MSG_EXP: &str = "Hello CC3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let sock = UdpSocket::bind("0.0.0.0:0").await?; // 任意の空いてるポートでバインド
    sock.connect(SERVER_ADDR).await?;

    // CC3000 実機の代わりに送信と応答確認を繰り返す
    loop {
        sock.send(MSG_TX.as_bytes()).await?;
        info!("Sent: {}", MSG_TX);

        let mut buf = [0u8; 256];
        let n = sock.recv(&mut buf).await?;
        let reply = String::from_utf8_lossy(&buf[..n]);

        if reply == MSG_EXP {
            info!("Received the expected message: {}", reply);
        } else {
            warn!("Received unexpected message: {}", reply);
        }

        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}
