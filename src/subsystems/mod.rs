
pub mod climber;
pub mod drive;

pub use self::climber::Climber;
pub use self::drive::Drive;
