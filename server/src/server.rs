use std::net::SocketAddr;

use log::{info, warn};
use tokio::net::UdpSocket;

/// CC3000 側の udp_client が送ってくるメッセージ (終端なし)
pub const MSG_EXP: &str = "Hello World from CC3000";
/// 期待メッセージを受け取ったときの応答
pub const MSG_TX: &str = "Hello CC3000";

pub const BIND_ADDR: &str = "10.0.0.1:44444";

const RECV_BUF_SIZE: usize = 256;

#[derive(Debug)]
pub struct UdpServer {
    socket: UdpSocket,
}

impl UdpServer {
    pub async fn bind(addr: &str) -> std::io::Result<Self> {
        let socket = UdpSocket::bind(addr).await?;
        info!("Bound to {}", socket.local_addr()?);
        Ok(Self { socket })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// 受信ループ。デコード失敗や I/O エラーはそのまま返して終了する
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut buf = [0u8; RECV_BUF_SIZE];

        loop {
            let (len, src) = self.socket.recv_from(&mut buf).await?;
            let data = std::str::from_utf8(&buf[..len])?;

            info!("Received from {}: {}", src, data);

            if data != MSG_EXP {
                warn!("Message text was not as expected.");
                continue;
            }

            self.socket.send_to(MSG_TX.as_bytes(), src).await?;
            info!("Sent reply to {}", src);
        }
    }
}
