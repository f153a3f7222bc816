pub mod collector;
pub mod entry;
pub mod forms;
pub mod handlers;
pub mod normalize;
pub mod pipeline;
pub mod solver;
pub mod variants;

pub use collector::{Collector, Dictionary};
pub use entry::{EntryMatcher, ParsedEntry, RawEntry, parse_entry};
pub use forms::generate_forms;
pub use handlers::{AppState, router};
pub use normalize::normalize;
pub use pipeline::{
    BuildError, BuildOptions, BuildStats, build_dictionary, build_from_file, load_dictionary,
    write_dictionary,
};
pub use solver::{SolveParams, Solver, parse_letters, parse_main_letter};
pub use variants::{VariantSpec, expand_variants, parse_variants};
