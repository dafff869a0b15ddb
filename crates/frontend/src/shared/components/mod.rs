pub mod glass_card;

pub use glass_card::GlassCard;
