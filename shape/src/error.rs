use smallvec::SmallVec;
use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Broadcast incompatibility between two concrete, unequal, non-unit axes.
    #[snafu(display("cannot broadcast axis {lhs} against axis {rhs} at position {position}"))]
    BroadcastIncompatible { lhs: u64, rhs: u64, position: usize },

    /// Axis index outside `[-rank, rank)`.
    #[snafu(display("axis {axis} is out of range for rank {rank}"))]
    AxisOutOfRange { axis: i64, rank: usize },

    /// The unknown-rank sentinel `-2` combined with other axes.
    #[snafu(display("unknown-rank sentinel -2 must be the only element of a shape, got {shape:?}"))]
    UnknownRankMisuse { shape: SmallVec<[i64; 4]> },

    /// A wire shape contains a negative size other than the -1/-2 sentinels.
    #[snafu(display("shape contains invalid negative dimension {value}"))]
    InvalidNegativeDim { value: i64 },

    /// An operation that requires a fixed rank received an unknown-rank shape.
    #[snafu(display("unknown-rank shape is not supported for {operation}"))]
    UnknownRankUnsupported { operation: &'static str },

    /// A range with lo > hi.
    #[snafu(display("invalid axis range ({lo}, {hi})"))]
    InvalidRange { lo: u64, hi: u64 },
}
