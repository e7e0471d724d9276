use homework_status_bot::{
    Config,
    HomeworkAPI,
    LogConfig,
    PollState,
    Poller,
    TelegramBot,
    logging,
    time::timestamp_now,
};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    if let Err(error) = logging::init(&LogConfig::from_env()) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            log::error!("Cannot start: {error}");
            return ExitCode::FAILURE;
        },
    };
    let api = HomeworkAPI::builder(config.practicum_token.clone(), config.endpoint.clone())
        .timeout(config.request_timeout)
        .build();
    let bot = TelegramBot::builder(config.telegram_token.clone(), config.telegram_chat_id.clone())
        .timeout(config.request_timeout)
        .build();
    let (api, bot) = match (api, bot) {
        (Ok(api), Ok(bot)) => (api, bot),
        (Err(error), _) | (_, Err(error)) => {
            log::error!("Cannot build HTTP client: {error}");
            return ExitCode::FAILURE;
        },
    };
    let poller = Poller::new(api, bot, config.poll_options());

    log::info!("Bot started");
    poller.run(PollState::new(timestamp_now())).await;

    ExitCode::SUCCESS
}
