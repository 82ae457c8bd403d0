//! Rectos is a small library of 2D axis-aligned rectangle math. It provides a
//! mutable [`Rectangle`][Rectangle] value type anchored at its top-left
//! corner, along with the [`Point`][Point] and [`Transform`][Transform]
//! helpers it collaborates with. It's intended as a leaf utility for
//! rendering, collision, and layout code.
//!
//! Two things about its contract are worth knowing up front:
//!
//! - Mutations never fail. Non-finite or negative-size input is silently
//!   dropped so call sites can chain freely. When you'd rather hear about bad
//!   input, [`Rectangle::try_set_to`][try_set_to] reports it as an error
//!   instead.
//! - [`contains`][contains] treats edges inclusively, while
//!   [`intersects`][intersects] uses pixel-grid semantics where a rectangle
//!   covers `[x, right - 1]`. Both conventions have callers that depend on
//!   them, so both are kept, separately documented.
//!
//! ## Example
//! ```
//! use rectos::Rectangle;
//!
//! let mut button = Rectangle::new(16.0, 16.0, 120.0, 32.0);
//! button.offset(4.0, 0.0);
//!
//! assert!(button.contains(24.0, 20.0));
//!
//! let panel = Rectangle::new(0.0, 0.0, 200.0, 200.0);
//! assert!(panel.contains_rect(&button));
//! assert_eq!(panel.union(&button), panel);
//! ```
//!
//! [Rectangle]: struct.Rectangle.html
//! [Point]: struct.Point.html
//! [Transform]: struct.Transform.html
//! [try_set_to]: struct.Rectangle.html#method.try_set_to
//! [contains]: struct.Rectangle.html#method.contains
//! [intersects]: struct.Rectangle.html#method.intersects

mod error;
mod point;
mod rect;
mod transform;

pub use error::*;
pub use point::*;
pub use rect::*;
pub use transform::*;
