use sslip_dns_application::use_cases::BuildResponseUseCase;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, error, info};

const RECV_BUFFER_SIZE: usize = 4096;

pub async fn start_dns_server(
    bind_addr: String,
    build_response: Arc<BuildResponseUseCase>,
) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = Arc::new(UdpSocket::bind(socket_addr).await?);

    info!(bind_address = %socket.local_addr()?, "DNS server ready");

    run_udp_loop(socket, build_response).await;
    Ok(())
}

async fn run_udp_loop(socket: Arc<UdpSocket>, build_response: Arc<BuildResponseUseCase>) {
    let mut recv_buf = [0u8; RECV_BUFFER_SIZE];

    loop {
        match socket.recv_from(&mut recv_buf).await {
            Ok((n, from)) => {
                let owned_buf: Arc<[u8]> = Arc::from(&recv_buf[..n]);
                let socket_clone = socket.clone();
                let use_case = build_response.clone();
                tokio::spawn(async move {
                    handle_datagram(&socket_clone, &use_case, &owned_buf, from).await;
                });
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                error!(error = %e, "UDP recv error");
            }
        }
    }
}

async fn handle_datagram(
    socket: &UdpSocket,
    build_response: &BuildResponseUseCase,
    query: &[u8],
    from: SocketAddr,
) {
    let transaction = match build_response.execute(query) {
        Ok(transaction) => transaction,
        Err(e) => {
            // Unanswerable input is dropped without a reply
            debug!(client = %from, error = %e, "Dropping datagram");
            return;
        }
    };

    if let Err(e) = socket.send_to(&transaction.response, from).await {
        error!(client = %from, error = %e, "UDP send error");
        return;
    }

    info!("{}", transaction.log.with_context(&from.to_string()));
}
