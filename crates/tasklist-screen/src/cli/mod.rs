/*
[INPUT]:  Terminal user input
[OUTPUT]: Screen commands driven from an interactive menu
[POS]:    CLI layer - module wiring
[UPDATE]: When adding CLI flows
*/

mod interactive;

pub use interactive::run_interactive;
