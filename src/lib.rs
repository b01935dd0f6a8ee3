pub mod logging;
pub mod orchestration;
pub mod population;
pub mod profiles;
pub mod runner;
pub mod storage;
pub mod workspace;

// Re-export commonly used types for convenience.
pub use orchestration::{EventType, GenerationDetails, RunEvent, RunLog};
pub use population::{
    generate_population, generate_seeded, CustomerRecord, Habit, Population, PopulationError,
    PopulationPlan, PopulationSummary,
};
pub use profiles::{Profile, ProfileSource, ReplayProfileSource, SyntheticProfileSource};
pub use runner::{run_generation, RunReport, RunRequest};
pub use workspace::AppConfig;
