//! `regression-lab-datasets` provides synthetic point sets to drive the regression lessons.
//!
//! ## Current State
//!
//! The following shapes are provided by [`generate::DatasetKind`]:
//!
//! * `linear` : a clean trend with a small noise band
//! * `noisy` : the same trend with a wide noise band
//! * `outliers` : the clean trend with two large deviations at indices 5 and 15
//! * `random` : uniform scatter without correlation
//!
//! ## Using a dataset
//!
//! ```
//! use regression_lab::fit;
//! use regression_lab_datasets::{generate_dataset, DatasetKind};
//!
//! let kind: DatasetKind = "noisy".parse().unwrap();
//! let points = generate_dataset(kind, 20);
//! let line = fit(&points);
//! # assert_eq!(points.len(), 20);
//! # assert!(line.slope.is_finite());
//! ```

pub mod generate;

pub use generate::{generate_dataset, generate_dataset_with_rng, DatasetKind};
