//! Graph algorithms
mod subgraph;
pub use self::subgraph::*;
mod counting;
pub use self::counting::*;
mod patterns;
pub use self::patterns::*;
mod holes;
pub use self::holes::*;
mod chordal;
pub use self::chordal::*;
mod invariants;
pub use self::invariants::*;
mod classes;
pub use self::classes::*;
mod partition;
pub use self::partition::*;
mod connectivity;
pub use self::connectivity::*;
mod hamiltonian;
pub use self::hamiltonian::*;
mod asteroidal;
pub use self::asteroidal::*;
mod distance_hereditary;
pub use self::distance_hereditary::*;
mod gamma;
pub use self::gamma::*;
mod editing;
pub use self::editing::*;
pub mod graphviz;
