use snafu::Snafu;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// A graph node's operator kind has no registered simulator.
    ///
    /// Raised at graph-construction time, before any simulation begins.
    #[snafu(display("no padding simulator registered for operator kind {op_type:?}"))]
    UnsupportedOperator { op_type: String },

    /// A leaf node was queried before the caller seeded its padding value.
    #[snafu(display("padding value missing for node {node} ({op_type}); leaves must be seeded via set_pvalue"))]
    MissingPaddingValue { node: u64, op_type: &'static str },

    /// A node id that does not belong to this graph.
    #[snafu(display("expression id {expr} is not part of this graph"))]
    UnknownExpr { expr: u64 },
}
