use async_std::task;

use rustywire::config::{self, ServerConfig};
use rustywire::net::server::Server;

fn main() -> std::io::Result<()> {
    let cfg = match std::env::args().nth(1) {
        Some(path) => ServerConfig::from_file(&path),
        None => ServerConfig::default(),
    };
    config::set_config(cfg);

    let server = Server;
    task::block_on(server.run())
}
