mod commands;
mod terminal;

use commands::{CommandLine, Commands, area, notify, order, sounds};
use solid_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        dry_run: commands.dry_run,
    };

    logging::init(cfg.quiet)?;
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Area { shapes, parallel } => {
            print::header("open/closed: shapes", cfg.quiet);
            area::area(&shapes, parallel, &cfg)
        }
        Commands::Sounds { animals } => {
            print::header("liskov substitution: animals", cfg.quiet);
            Ok(sounds::sounds(&animals, &cfg))
        }
        Commands::Order { customer, items } => {
            print::header("single responsibility: orders", cfg.quiet);
            order::order(customer, items, &cfg).await
        }
        Commands::Notify {
            recipient,
            subject,
            body,
        } => {
            print::header("interface segregation: notifications", cfg.quiet);
            notify::notify(&recipient, &subject, &body, &cfg).await
        }
    }
}
