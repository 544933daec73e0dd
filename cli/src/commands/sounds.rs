use colored::*;
use solid_common::config::Config;
use solid_common::models::animal::Animal;
use solid_core::choir::Choir;

use crate::terminal::print::{self, KEY_WIDTH};

pub fn sounds(animals: &[Animal], cfg: &Config) {
    let longest: usize = animals
        .iter()
        .map(|animal| animal.to_string().len())
        .max()
        .unwrap_or(0);
    KEY_WIDTH.set(longest);

    for (animal, sound) in animals.iter().zip(Choir::sounds(animals)) {
        match cfg.quiet {
            2 => print::print(sound),
            _ => print::key_value(&animal.to_string(), sound.bold()),
        }
    }

    print::footer(cfg.quiet);
}
