//! Pinhole ray caster
//!
//! Casts one ray per pixel through a pinhole camera at a single sphere and
//! writes the result as a plain-text PPM image. The maths runs on a small
//! const-generic [`tensor`] type shared by every stage.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod camera;
pub mod error;
pub mod output;
pub mod ray;
pub mod shader;
pub mod sphere;
pub mod tensor;
pub mod tracer;
