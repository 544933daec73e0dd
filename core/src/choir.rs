use solid_common::models::animal::Animal;

/// Lets every animal speak, whatever its kind.
pub struct Choir;

impl Choir {
    /// One sound per animal, in input order.
    pub fn sounds(animals: &[Animal]) -> Vec<&'static str> {
        animals.iter().map(Animal::sound).collect()
    }
}
