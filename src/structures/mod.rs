//! Structures used throughout the library.
//!
//! - [atom]s, and the kinds of atom a program gives rise to.
//! - [literal]s, an atom paired with a polarity.
//! - [truth], the three (and a half) values an atom may take.
//! - [nogood]s, collections of literals which may not all hold together.
//! - [answer_set]s, the (sorted) atoms true in a stable model.

pub mod answer_set;
pub mod atom;
pub mod literal;
pub mod nogood;
pub mod truth;
