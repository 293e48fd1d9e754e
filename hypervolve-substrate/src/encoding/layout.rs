use super::{NodeType, Substrate, SubstrateError};

/// Maps a (source, target) pair of substrate nodes to the
/// four-value coordinate vector fed to the genotype network.
///
/// Implementations may place nodes in any geometry; genome
/// generation only requires that each node resolve to a position.
/// [`SandwichLayout`] provides the standard planar arrangement.
pub trait SubstrateLayout {
    /// Returns `[source_x, source_y, target_x, target_y]` for the
    /// given pair of global node indices.
    ///
    /// # Errors
    /// Returns an error if either index lies outside the
    /// substrate's declared layers.
    fn coordinates(
        &self,
        substrate: &Substrate,
        source: usize,
        target: usize,
    ) -> Result<[f32; 4], SubstrateError>;
}

/// The standard planar arrangement: each layer is a row of evenly
/// spaced nodes spanning `[-1, 1]`, with the input row at `y = -1`,
/// the hidden row at `y = 0` and the output row at `y = 1`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SandwichLayout;

impl SandwichLayout {
    fn position(substrate: &Substrate, node: usize) -> Result<(f32, f32), SubstrateError> {
        let node_type = substrate.node_type(node)?;
        let delta = substrate.layer_delta(node_type);
        let along = -1.0 + delta / 2.0 + substrate.layer_index(node)? as f32 * delta;
        let across = match node_type {
            NodeType::Sensor => -1.0,
            NodeType::Neuron => 0.0,
            NodeType::Actuator => 1.0,
        };
        Ok((along, across))
    }
}

impl SubstrateLayout for SandwichLayout {
    fn coordinates(
        &self,
        substrate: &Substrate,
        source: usize,
        target: usize,
    ) -> Result<[f32; 4], SubstrateError> {
        let (source_x, source_y) = Self::position(substrate, source)?;
        let (target_x, target_y) = Self::position(substrate, target)?;
        Ok([source_x, source_y, target_x, target_y])
    }
}
