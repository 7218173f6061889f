//! Error types for the randigraph core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::NodeId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while building or characterising graphs.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// Generator parameters were outside their accepted range.
    #[error("invalid parameters: {reason}")]
    InvalidParameters {
        /// Human-readable description of the rejected parameter.
        reason: String,
    },
    /// An edge referenced a node that is not a key of the graph.
    #[error("node {node} referenced by node {referenced_by} is not present in the graph")]
    KeyNotFound {
        /// The dangling edge target.
        node: NodeId,
        /// Source of the edge that referenced the missing node.
        referenced_by: NodeId,
    },
    /// A node listed itself among its outgoing edges.
    #[error("node {node} has an edge to itself")]
    SelfLoop {
        /// The node carrying the self-loop.
        node: NodeId,
    },
    /// A distribution could not be normalised because its values sum to zero.
    #[error("cannot normalise a distribution whose values sum to zero")]
    DivisionByZero,
    /// A trial could not draw the requested number of distinct nodes.
    #[error("cannot sample {requested} distinct nodes from {available} available")]
    InvalidSampleSize {
        /// Number of distinct nodes the caller asked for.
        requested: usize,
        /// Number of nodes the trial could draw from.
        available: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// Generator parameters were outside their accepted range.
        InvalidParameters => InvalidParameters { .. } => "GRAPH_INVALID_PARAMETERS",
        /// An edge referenced a node that is not a key of the graph.
        KeyNotFound => KeyNotFound { .. } => "GRAPH_KEY_NOT_FOUND",
        /// A node listed itself among its outgoing edges.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// A distribution could not be normalised because its values sum to zero.
        DivisionByZero => DivisionByZero => "GRAPH_DIVISION_BY_ZERO",
        /// A trial could not draw the requested number of distinct nodes.
        InvalidSampleSize => InvalidSampleSize { .. } => "GRAPH_INVALID_SAMPLE_SIZE",
    }
}

impl GraphError {
    pub(crate) fn invalid_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidParameters {
            reason: reason.into(),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
