//! Serializable envelope around a computation result.
//!
//! A successful [`Response`] serializes as the result itself. A failed one
//! serializes as `{"error": message, "kind": kind, ...}` followed by the empty
//! shape of the result, so consumers always find the same top-level fields.

use serde::{Serialize, Serializer};

use crate::{
    control_chart::{SubgroupPoint, XBarRChart},
    descriptive::DescriptiveStats,
    error::{ErrorKind, StatsError},
    grouped::GroupedStats,
};

/// A result type that can be reported through a [`Response`].
pub trait Report: Serialize {
    /// Fields serialized next to an error.
    type Empty: Serialize + Default;
}

impl Report for DescriptiveStats {
    type Empty = Self;
}

impl Report for GroupedStats {
    type Empty = Self;
}

impl Report for XBarRChart {
    type Empty = EmptyControlChart;
}

/// Serializes as `{}`.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct EmptyObject {}

/// The control chart shape reported alongside an error.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmptyControlChart {
    pub subgroups: Vec<SubgroupPoint>,
    pub x_bar_limits: EmptyObject,
    pub range_limits: EmptyObject,
}

#[derive(Serialize)]
struct ErrorBody<E> {
    error: String,
    kind: ErrorKind,
    #[serde(flatten)]
    empty: E,
}

/// The outcome of a request, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<R>(pub Result<R, StatsError>);

impl<R> Response<R> {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.0.is_ok()
    }

    #[must_use]
    pub fn error(&self) -> Option<&StatsError> {
        self.0.as_ref().err()
    }

    pub fn into_result(self) -> Result<R, StatsError> {
        self.0
    }
}

impl<R> Serialize for Response<R>
where
    R: Report,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            Ok(report) => report.serialize(serializer),
            Err(err) => ErrorBody {
                error: err.to_string(),
                kind: err.kind(),
                empty: R::Empty::default(),
            }
            .serialize(serializer),
        }
    }
}
