pub mod damage;
pub mod engine;
pub mod events;
pub mod rng;
pub mod side;
pub mod turn;

#[cfg(test)]
mod tests;
