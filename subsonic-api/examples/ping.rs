//! Ping a server and list its playlists
//!
//! Usage: cargo run --example ping -- <base-url> <username> <password>
//!
//! Set SUBSONIC_LOG_MODE=debug to see request diagnostics.

use std::env;
use std::process::ExitCode;

use subsonic_api::logging::init_logging_from_env;
use subsonic_api::SubsonicClient;

fn main() -> ExitCode {
    if let Err(e) = init_logging_from_env() {
        eprintln!("logging disabled: {}", e);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let [base_url, username, password] = args.as_slice() else {
        eprintln!("usage: ping <base-url> <username> <password>");
        return ExitCode::from(2);
    };

    let client = SubsonicClient::new(base_url.as_str());
    client.set_credentials(username, password);

    match client.ping() {
        Ok(envelope) => println!(
            "{} {} (API {})",
            envelope.server_type.as_deref().unwrap_or("subsonic"),
            envelope.server_version.as_deref().unwrap_or("?"),
            envelope.api_version
        ),
        Err(e) => {
            eprintln!("ping failed [{:?}]: {}", e.kind, e);
            return ExitCode::FAILURE;
        }
    }

    match client.get_playlists(None) {
        Ok(playlists) => {
            for playlist in playlists {
                println!("{:>6}  {} ({} songs)", playlist.id, playlist.name, playlist.song_count);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("getPlaylists failed [{:?}]: {}", e.kind, e);
            ExitCode::FAILURE
        }
    }
}
