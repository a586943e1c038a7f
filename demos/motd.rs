use pocketstatus::MotdRequest;
use std::borrow::Cow;
use std::time::Duration;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let host = args.next().unwrap_or_else(|| "play.nethergames.org".into());
    let port = args
        .next()
        .and_then(|p| p.parse().ok())
        .unwrap_or(19132);

    let request = MotdRequest {
        hostname: Cow::Owned(host),
        port,
        timeout: Duration::from_secs(5),
    };

    match request.query() {
        Ok(motd) => println!("motd: {}", motd),
        Err(e) => eprintln!("query failed: {}", e),
    }
}
