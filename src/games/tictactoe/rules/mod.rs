//! Game rules for tic-tac-toe.
//!
//! Rules evaluate a board without mutating it. Placement lives on
//! [`Board`](super::Board); whether a placement ended the round is asked
//! here as a separate step.

mod draw;
mod win;
