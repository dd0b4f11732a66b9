//! Testing support
//!
//! Tests should parse documents from the bundled [`samples`] rather than
//! inline strings when the document is more than a couple of lines, and
//! check the result with [`assert_workout`]:
//!
//! ```rust,ignore
//! use prac_parser::prac::testing::{assert_workout, samples::Sample};
//!
//! let parsed = Sample::Basic.parse().unwrap();
//! assert_workout(&parsed)
//!     .set_count(3)
//!     .set(1, |set| {
//!         set.name("Main Set").repeat(3).item(0, |item| {
//!             item.reps(4).distance(100).intervals(&["1:30", "1:40"]);
//!         });
//!     });
//! ```

pub mod assertions;
pub mod samples;

pub use assertions::{assert_workout, ItemAssertion, SetAssertion, VariationAssertion, WorkoutAssertion};
