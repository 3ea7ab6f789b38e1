// Binary entry point for the interactive chat.
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use studybuddy::cli::{parse_args, print_help};
use studybuddy::config::Config;
use studybuddy::context::StandardContext;
use studybuddy::controller::ChatController;
use studybuddy::corpus::{bundled_corpus, load_corpus};
use studybuddy::help::WELCOME_TEXT;
use studybuddy::logging::init_file_logger;
use studybuddy::model::FaqMatcher;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    if cli.help {
        print_help("studybuddy");
        return Ok(());
    }

    let ctx = StandardContext::new(cli.root.clone());
    let config = Config::load_or_default(&ctx)?;
    if let Err(e) = init_file_logger(&ctx, &config.log_level) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }

    let entries = match cli.faq_path.or_else(|| config.faq_path.clone().map(Into::into)) {
        Some(path) => load_corpus(&path)?,
        None => bundled_corpus()?,
    };
    let faq = FaqMatcher::new(entries).context("Could not build the FAQ matcher")?;
    let threshold = cli.threshold.unwrap_or(config.similarity_threshold);
    log::info!("Starting chat with threshold {}", threshold);

    let mut controller = ChatController::new(faq, threshold);

    println!("{}", WELCOME_TEXT);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nYou: ");
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let reply = controller.handle(&line?);
        println!("Bot: {}", reply.text);
        if reply.exit {
            break;
        }
    }
    Ok(())
}
