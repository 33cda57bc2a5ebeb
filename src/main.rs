/// The client's entry-point.
///
/// Runs one leaderboard session: load the config, fetch all records,
/// then translate shell commands into actions until stdin closes or
/// the user quits.
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use dotenv::dotenv;
    use tokio::io::{AsyncBufReadExt, BufReader};

    use lapboard::command::{SessionCommand, SESSION_COMMAND_REFERENCE};
    use lapboard::config::Config;
    use lapboard::controller::Controller;
    use lapboard::network::{ApiClient, Backend};

    // Read environment variables from an '.env' file in the working directory.
    // We use these env vars:
    //  - RUST_LOG
    //  - LAPBOARD_CONFIG
    //  - LAPBOARD_API_URL
    let using_env_file = dotenv().is_ok();

    env_logger::init(); // Use log::* to write to stderr

    if using_env_file {
        log::info!("using .env file")
    }

    let config = Config::read_from_env();
    let api = Arc::new(ApiClient::new(&config)) as Arc<dyn Backend>;

    log::info!("fetching lap records...");
    let controller = Controller::init(api).await;

    println!("{}", controller.current_view().await);
    println!("{}", SESSION_COMMAND_REFERENCE);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            // stdin closed; the session is over
            _ => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        match SessionCommand::from(&line) {
            Some(SessionCommand::Quit) => break,
            Some(SessionCommand::Help) | None => println!("{}", SESSION_COMMAND_REFERENCE),
            Some(cmd) => {
                controller.on_command(cmd).await;
                println!("{}", controller.current_view().await);
            }
        }
    }
}
