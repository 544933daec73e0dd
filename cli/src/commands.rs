pub mod area;
pub mod notify;
pub mod order;
pub mod sounds;

use clap::{ArgAction, Parser, Subcommand};
use solid_common::models::animal::Animal;
use solid_common::models::order::Item;

#[derive(Parser)]
#[command(name = "solid")]
#[command(version, about = "The SOLID principles, one command each.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print less. Repeat to print only results
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Log payment, shipping and email calls instead of failing them
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Total the area of one or more shapes (rect:WxH, circle:R)
    #[command(alias = "a")]
    Area {
        #[arg(required = true, value_name = "SHAPE")]
        shapes: Vec<String>,
        /// Compute the individual areas on all cores
        #[arg(long)]
        parallel: bool,
    },
    /// Let each animal make its sound (dog, cat)
    #[command(alias = "s")]
    Sounds {
        #[arg(required = true, value_name = "ANIMAL")]
        animals: Vec<Animal>,
    },
    /// Price an order and place it (items as NAME=PRICE)
    #[command(alias = "o")]
    Order {
        customer: String,
        #[arg(required = true, value_name = "ITEM")]
        items: Vec<Item>,
    },
    /// Email a recipient and log that it was sent
    #[command(alias = "n")]
    Notify {
        recipient: String,
        subject: String,
        body: String,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = CommandLine::try_parse_from(["solid", "area", "rect:2x3", "circle:5", "-qq", "--dry-run"])
            .unwrap();
        assert_eq!(cli.quiet, 2);
        assert!(cli.dry_run);
        assert!(matches!(
            cli.command,
            Commands::Area { ref shapes, parallel: false } if shapes.len() == 2
        ));
    }

    #[test]
    fn parses_typed_arguments() {
        let cli = CommandLine::try_parse_from(["solid", "s", "dog", "Cat"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Sounds { ref animals } if animals == &[Animal::Dog, Animal::Cat]
        ));

        let cli = CommandLine::try_parse_from(["solid", "order", "alice", "book=12.5"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Order { ref customer, ref items } if customer == "alice" && items.len() == 1
        ));
    }

    #[test]
    fn rejects_unknown_animals_and_missing_items() {
        assert!(CommandLine::try_parse_from(["solid", "sounds", "cow"]).is_err());
        assert!(CommandLine::try_parse_from(["solid", "order", "alice"]).is_err());
        assert!(CommandLine::try_parse_from(["solid", "area"]).is_err());
    }
}
