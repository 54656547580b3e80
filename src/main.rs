//! GptBuddy Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, Update};
use teloxide::utils::command::BotCommands;
use tracing::{error, info, warn};

use GptBuddy::{
    config::Settings,
    handlers::{handle_callback_query, handle_command, handle_message, Router},
    middleware::UpdateLogger,
    services::ServiceFactory,
    state::{Command, SessionStore},
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard flushes the log file on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", GptBuddy::info());

    let bot = Bot::new(&settings.bot.token);

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    info!(model = %settings.openai.model, "Initializing services...");
    let services = ServiceFactory::new(bot.clone(), &settings)?;
    let router = Arc::new(Router::new(services, SessionStore::new()));
    let update_logger = Arc::new(UpdateLogger::default());

    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![router.clone(), update_logger])
        .default_handler(|upd| async move {
            warn!(update_id = upd.id.0, "Unhandled update");
        })
        .enable_ctrlc_handler()
        .build();

    info!("GptBuddy bot is ready, starting long polling");
    dispatcher.dispatch().await;

    let stats = router.sessions().stats().await;
    info!(
        active_sessions = stats.active_sessions,
        flows = ?stats.flows_count,
        last_activity = ?stats.last_activity,
        "GptBuddy bot has been shut down"
    );

    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    dptree::entry()
        .inspect(|update: Update, logger: Arc<UpdateLogger>| logger.log_update(&update))
        .branch(
            Update::filter_message()
                .branch(
                    // Handle commands
                    dptree::entry()
                        .filter_command::<Command>()
                        .endpoint(handle_commands),
                )
                .branch(
                    // Handle free text
                    dptree::endpoint(handle_messages),
                ),
        )
        .branch(
            // Handle callback queries
            Update::filter_callback_query().endpoint(handle_callbacks),
        )
}

/// Handle bot commands
async fn handle_commands(
    msg: Message,
    cmd: Command,
    router: Arc<Router>,
    logger: Arc<UpdateLogger>,
) -> HandlerResult {
    let tracker = logger.track("command");
    let result = handle_command(&router, msg, cmd).await;
    tracker.complete(result.is_ok());

    if let Err(e) = result {
        error!(error = %e, severity = ?e.severity(), recoverable = e.is_recoverable(), "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(msg: Message, router: Arc<Router>, logger: Arc<UpdateLogger>) -> HandlerResult {
    let tracker = logger.track("message");
    let result = handle_message(&router, msg).await;
    tracker.complete(result.is_ok());

    if let Err(e) = result {
        error!(error = %e, severity = ?e.severity(), recoverable = e.is_recoverable(), "Error handling message");
        return Err(e.into());
    }

    Ok(())
}

/// Handle callback queries
async fn handle_callbacks(
    bot: Bot,
    query: CallbackQuery,
    router: Arc<Router>,
    logger: Arc<UpdateLogger>,
) -> HandlerResult {
    let user_id = query.from.id.0 as i64;
    let tracker = logger.track("callback_query");
    let result = handle_callback_query(bot, query, &router).await;
    tracker.complete(result.is_ok());

    if let Err(e) = result {
        error!(user_id = user_id, error = %e, severity = ?e.severity(), recoverable = e.is_recoverable(), "Error handling callback query");
        return Err(e.into());
    }

    Ok(())
}
