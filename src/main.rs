use std::net::SocketAddr;

mod cli;

#[tokio::main]
async fn main() {
    match cli::run() {
        cli::RunOutcome::Serve(config) => {
            let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
            println!("listening on http://{addr}");
            pushrelay::serve(addr, config).await;
        }
        cli::RunOutcome::Exit(code) => std::process::exit(code),
    }
}
