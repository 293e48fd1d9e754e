//! Indirect encoding of phenotype genomes against a fixed
//! geometric substrate.
//!
//! A [`Substrate`] holds an arrangement of input, output and hidden
//! neuron slots. Generating a genome queries a compact genotype
//! network once per candidate connection, at the coordinates of the
//! connection's endpoints; signals that clear the pruning threshold
//! become weighted connections. A small genotype network can this
//! way specify a much larger, spatially regular phenotype.
mod config;
mod errors;
mod genes;
mod layout;

pub use config::SubstrateConfig;
pub use errors::{ConfigError, SubstrateError};
pub use genes::{ConnectionGene, NeuronGene, NodeType, SubstrateGenome};
pub use layout::{SandwichLayout, SubstrateLayout};

use hypervolve::{ActivationType, Network};

/// A fixed geometric arrangement of phenotype neuron slots,
/// queried against a genotype network to produce full phenotype
/// genomes.
///
/// Neuron slots are numbered globally, inputs first, then outputs,
/// then hidden; every index computation in the encoder leans on
/// that ordering.
#[derive(Clone, Debug)]
pub struct Substrate {
    input_count: usize,
    output_count: usize,
    hidden_count: usize,
    input_delta: f32,
    output_delta: f32,
    hidden_delta: f32,
    threshold: f32,
    weight_range: f32,
    activation: ActivationType,
    neurons: Vec<NeuronGene>,
}

impl Substrate {
    /// Creates a substrate with the given layer sizes.
    ///
    /// # Errors
    /// Returns an error if the configuration holds an unresolved
    /// threshold or weight range.
    ///
    /// # Examples
    /// ```
    /// use hypervolve_substrate::encoding::{Substrate, SubstrateConfig};
    ///
    /// let config = SubstrateConfig {
    ///     threshold: 0.1,
    ///     weight_range: 3.0,
    ///     ..SubstrateConfig::zero()
    /// };
    ///
    /// let substrate = Substrate::new(2, 1, 0, &config).unwrap();
    /// assert_eq!(substrate.neuron_count(), 3);
    ///
    /// // An unresolved configuration never passes silently.
    /// assert!(Substrate::new(2, 1, 0, &SubstrateConfig::zero()).is_err());
    /// ```
    pub fn new(
        input_count: usize,
        output_count: usize,
        hidden_count: usize,
        config: &SubstrateConfig,
    ) -> Result<Substrate, SubstrateError> {
        config.validate().map_err(SubstrateError::Config)?;

        let mut neurons = Vec::with_capacity(input_count + output_count + hidden_count);
        for i in 0..input_count {
            neurons.push(NeuronGene::new(i, NodeType::Sensor, config.activation));
        }
        for o in 0..output_count {
            neurons.push(NeuronGene::new(
                o + input_count,
                NodeType::Actuator,
                config.activation,
            ));
        }
        for h in 0..hidden_count {
            neurons.push(NeuronGene::new(
                h + input_count + output_count,
                NodeType::Neuron,
                config.activation,
            ));
        }

        Ok(Substrate {
            input_count,
            output_count,
            hidden_count,
            input_delta: spacing(input_count),
            output_delta: spacing(output_count),
            hidden_delta: spacing(hidden_count),
            threshold: config.threshold,
            weight_range: config.weight_range,
            activation: config.activation,
            neurons,
        })
    }

    /// Number of input neuron slots.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Number of output neuron slots.
    pub fn output_count(&self) -> usize {
        self.output_count
    }

    /// Number of hidden neuron slots.
    pub fn hidden_count(&self) -> usize {
        self.hidden_count
    }

    /// Total number of neuron slots.
    pub fn neuron_count(&self) -> usize {
        self.input_count + self.output_count + self.hidden_count
    }

    /// The substrate's neurons, ordered inputs, then outputs, then
    /// hidden.
    pub fn neurons(&self) -> &[NeuronGene] {
        &self.neurons
    }

    /// The activation function assigned to every substrate neuron.
    pub fn activation(&self) -> ActivationType {
        self.activation
    }

    /// Classifies a global node index into its layer.
    ///
    /// # Errors
    /// Returns an error if the index lies outside all three layer
    /// ranges.
    pub fn node_type(&self, node: usize) -> Result<NodeType, SubstrateError> {
        if node < self.input_count {
            Ok(NodeType::Sensor)
        } else if node < self.input_count + self.output_count {
            Ok(NodeType::Actuator)
        } else if node < self.neuron_count() {
            Ok(NodeType::Neuron)
        } else {
            Err(SubstrateError::InvalidNode(node))
        }
    }

    /// Returns a global node index's position within its own layer.
    ///
    /// # Errors
    /// Returns an error if the index lies outside all three layer
    /// ranges.
    pub fn layer_index(&self, node: usize) -> Result<usize, SubstrateError> {
        Ok(match self.node_type(node)? {
            NodeType::Sensor => node,
            NodeType::Actuator => node - self.input_count,
            NodeType::Neuron => node - self.input_count - self.output_count,
        })
    }

    /// Returns the spacing between adjacent nodes of a layer, zero
    /// for an empty layer.
    pub fn layer_delta(&self, node_type: NodeType) -> f32 {
        match node_type {
            NodeType::Sensor => self.input_delta,
            NodeType::Actuator => self.output_delta,
            NodeType::Neuron => self.hidden_delta,
        }
    }

    fn input_node(&self, index: usize) -> usize {
        index
    }

    fn output_node(&self, index: usize) -> usize {
        index + self.input_count
    }

    fn hidden_node(&self, index: usize) -> usize {
        index + self.input_count + self.output_count
    }

    /// Rescales a raw query signal into a connection weight. The
    /// signal's sign is preserved; magnitude grows linearly from
    /// zero at the threshold up to the configured weight range.
    fn weight(&self, raw: f32) -> f32 {
        (raw.abs() - self.threshold) / (1.0 - self.threshold) * self.weight_range * raw.signum()
    }

    /// Generates a phenotype genome by querying the genotype
    /// network over the standard planar layout.
    ///
    /// # Errors
    /// Returns an error if a queried node falls outside the
    /// substrate's layers.
    pub fn generate_genome<N: Network>(
        &self,
        genotype: &mut N,
    ) -> Result<SubstrateGenome, SubstrateError> {
        self.generate_genome_with(genotype, &SandwichLayout)
    }

    /// Generates a phenotype genome by querying the genotype
    /// network over the given layout.
    ///
    /// Queries walk the fixed layer pairings — input to hidden and
    /// hidden to output when hidden slots exist, input straight to
    /// output otherwise. For each candidate connection the genotype
    /// network is cleared, fed the endpoint coordinates, stepped to
    /// settlement, and read; signals whose magnitude clears the
    /// pruning threshold become connections.
    ///
    /// # Errors
    /// Returns an error if the layout addresses a node outside the
    /// substrate's layers.
    pub fn generate_genome_with<N, L>(
        &self,
        genotype: &mut N,
        layout: &L,
    ) -> Result<SubstrateGenome, SubstrateError>
    where
        N: Network,
        L: SubstrateLayout,
    {
        // Settling budget: enough steps for signal to traverse the
        // genotype network's own depth twice over.
        let steps =
            2 * (genotype.neuron_count() - (genotype.input_count() + genotype.output_count())) + 1;

        let mut connections = vec![];
        if self.hidden_count > 0 {
            for input in 0..self.input_count {
                for hidden in 0..self.hidden_count {
                    self.query(
                        genotype,
                        layout,
                        self.input_node(input),
                        self.hidden_node(hidden),
                        steps,
                        &mut connections,
                    )?;
                }
            }
            for hidden in 0..self.hidden_count {
                for output in 0..self.output_count {
                    self.query(
                        genotype,
                        layout,
                        self.hidden_node(hidden),
                        self.output_node(output),
                        steps,
                        &mut connections,
                    )?;
                }
            }
        } else {
            for input in 0..self.input_count {
                for output in 0..self.output_count {
                    self.query(
                        genotype,
                        layout,
                        self.input_node(input),
                        self.output_node(output),
                        steps,
                        &mut connections,
                    )?;
                }
            }
        }

        Ok(SubstrateGenome::new(
            0,
            self.neurons.clone(),
            connections,
            self.input_count,
            self.output_count,
        ))
    }

    /// Queries the genotype network for one candidate connection,
    /// appending it if the signal clears the pruning threshold.
    fn query<N, L>(
        &self,
        genotype: &mut N,
        layout: &L,
        source: usize,
        target: usize,
        steps: usize,
        connections: &mut Vec<ConnectionGene>,
    ) -> Result<(), SubstrateError>
    where
        N: Network,
        L: SubstrateLayout,
    {
        let coordinates = layout.coordinates(self, source, target)?;
        genotype.clear_state();
        genotype.set_inputs(&coordinates);
        for _ in 0..steps {
            genotype.activate();
        }
        let raw = genotype.output(0);

        if raw.abs() > self.threshold {
            connections.push(ConnectionGene::new(
                connections.len(),
                source,
                target,
                self.weight(raw),
            ));
        }
        Ok(())
    }
}

fn spacing(count: usize) -> f32 {
    if count == 0 {
        0.0
    } else {
        2.0 / count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A genotype stub answering every query with a fixed signal,
    /// keeping a log of the coordinate vectors it was fed.
    struct ConstantGenotype {
        signal: f32,
        queries: Vec<[f32; 4]>,
        inputs: [f32; 4],
    }

    impl ConstantGenotype {
        fn new(signal: f32) -> ConstantGenotype {
            ConstantGenotype {
                signal,
                queries: vec![],
                inputs: [0.0; 4],
            }
        }
    }

    impl Network for ConstantGenotype {
        fn clear_state(&mut self) {
            self.inputs = [0.0; 4];
        }

        fn set_inputs(&mut self, inputs: &[f32]) {
            self.inputs[..inputs.len()].copy_from_slice(inputs);
            self.queries.push(self.inputs);
        }

        fn activate(&mut self) {}

        fn output(&self, _index: usize) -> f32 {
            self.signal
        }

        fn neuron_count(&self) -> usize {
            7
        }

        fn input_count(&self) -> usize {
            4
        }

        fn output_count(&self) -> usize {
            1
        }
    }

    fn substrate(input: usize, output: usize, hidden: usize) -> Substrate {
        let config = SubstrateConfig {
            threshold: 0.1,
            weight_range: 3.0,
            ..SubstrateConfig::zero()
        };
        Substrate::new(input, output, hidden, &config).unwrap()
    }

    #[test]
    fn neuron_list_partitions_cleanly_in_layer_order() {
        let substrate = substrate(3, 2, 4);

        assert_eq!(substrate.neuron_count(), 9);
        for (index, neuron) in substrate.neurons().iter().enumerate() {
            assert_eq!(neuron.innovation(), index);
            assert_eq!(substrate.node_type(index).unwrap(), neuron.node_type());
        }
        assert!((0..3).all(|n| substrate.node_type(n) == Ok(NodeType::Sensor)));
        assert!((3..5).all(|n| substrate.node_type(n) == Ok(NodeType::Actuator)));
        assert!((5..9).all(|n| substrate.node_type(n) == Ok(NodeType::Neuron)));
        assert_eq!(substrate.node_type(9), Err(SubstrateError::InvalidNode(9)));
    }

    #[test]
    fn layer_indices_restart_per_layer() {
        let substrate = substrate(3, 2, 4);

        assert_eq!(substrate.layer_index(2).unwrap(), 2);
        assert_eq!(substrate.layer_index(3).unwrap(), 0);
        assert_eq!(substrate.layer_index(5).unwrap(), 0);
        assert_eq!(substrate.layer_index(8).unwrap(), 3);
    }

    #[test]
    fn empty_layers_have_zero_spacing() {
        let substrate = substrate(2, 1, 0);
        assert_eq!(substrate.layer_delta(NodeType::Neuron), 0.0);
        assert_eq!(substrate.layer_delta(NodeType::Sensor), 1.0);
        assert_eq!(substrate.layer_delta(NodeType::Actuator), 2.0);
    }

    #[test]
    fn rescaled_weights_keep_their_sign_and_grow_with_magnitude() {
        let substrate = substrate(2, 1, 0);

        let mut previous = 0.0;
        for raw in [0.2, 0.4, 0.6, 0.8, 1.0] {
            let weight = substrate.weight(raw);
            assert!(weight > previous);
            assert_eq!(substrate.weight(-raw), -weight);
            previous = weight;
        }
        assert_eq!(substrate.weight(1.0), 3.0);
    }

    #[test]
    fn silent_genotype_yields_no_connections() {
        let substrate = substrate(2, 2, 3);
        let mut genotype = ConstantGenotype::new(0.0);

        let genome = substrate.generate_genome(&mut genotype).unwrap();

        assert_eq!(genome.connections().len(), 0);
        assert_eq!(genome.neurons().len(), 7);
    }

    #[test]
    fn without_hidden_slots_every_query_runs_input_to_output() {
        let substrate = substrate(3, 2, 0);
        let mut genotype = ConstantGenotype::new(0.5);

        let genome = substrate.generate_genome(&mut genotype).unwrap();

        assert_eq!(genotype.queries.len(), 3 * 2);
        assert_eq!(genome.connections().len(), 3 * 2);
        for connection in genome.connections() {
            assert_eq!(
                substrate.node_type(connection.source()).unwrap(),
                NodeType::Sensor
            );
            assert_eq!(
                substrate.node_type(connection.target()).unwrap(),
                NodeType::Actuator
            );
        }
    }

    #[test]
    fn hidden_slots_split_queries_into_two_layer_pairings() {
        let substrate = substrate(2, 1, 3);
        let mut genotype = ConstantGenotype::new(0.5);

        let genome = substrate.generate_genome(&mut genotype).unwrap();

        // input→hidden plus hidden→output, and nothing else.
        assert_eq!(genotype.queries.len(), 2 * 3 + 3 * 1);
        assert!(genome.connections().iter().all(|c| {
            let source = substrate.node_type(c.source()).unwrap();
            let target = substrate.node_type(c.target()).unwrap();
            (source, target) == (NodeType::Sensor, NodeType::Neuron)
                || (source, target) == (NodeType::Neuron, NodeType::Actuator)
        }));
    }

    #[test]
    fn two_by_one_scenario_produces_the_expected_connections() {
        let substrate = substrate(2, 1, 0);
        let mut genotype = ConstantGenotype::new(0.5);

        let genome = substrate.generate_genome(&mut genotype).unwrap();

        assert_eq!(genome.neurons().len(), 3);
        assert_eq!(genome.connections().len(), 2);
        for (index, connection) in genome.connections().iter().enumerate() {
            assert_eq!(connection.innovation(), index);
            assert!((connection.weight() - 4.0 / 3.0).abs() < 1e-5);
        }
        assert_eq!(genome.input_count(), 2);
        assert_eq!(genome.output_count(), 1);
    }

    #[test]
    fn negative_signals_produce_negative_weights() {
        let substrate = substrate(2, 1, 0);
        let mut genotype = ConstantGenotype::new(-0.5);

        let genome = substrate.generate_genome(&mut genotype).unwrap();

        assert_eq!(genome.connections().len(), 2);
        for connection in genome.connections() {
            assert!((connection.weight() + 4.0 / 3.0).abs() < 1e-5);
        }
    }

    #[test]
    fn signals_at_the_threshold_are_pruned() {
        let substrate = substrate(2, 1, 0);
        let mut genotype = ConstantGenotype::new(0.1);

        let genome = substrate.generate_genome(&mut genotype).unwrap();

        assert_eq!(genome.connections().len(), 0);
    }

    #[test]
    fn faulty_layout_fails_loudly() {
        struct OffByALayer;

        impl SubstrateLayout for OffByALayer {
            fn coordinates(
                &self,
                substrate: &Substrate,
                source: usize,
                target: usize,
            ) -> Result<[f32; 4], SubstrateError> {
                // Addresses one slot past everything the substrate declares.
                SandwichLayout.coordinates(substrate, source, target + substrate.neuron_count())
            }
        }

        let substrate = substrate(2, 1, 0);
        let mut genotype = ConstantGenotype::new(0.5);

        assert_eq!(
            substrate.generate_genome_with(&mut genotype, &OffByALayer),
            Err(SubstrateError::InvalidNode(5))
        );
    }

    #[test]
    fn generated_genomes_round_trip_through_serde() {
        let substrate = substrate(2, 1, 0);
        let mut genotype = ConstantGenotype::new(0.5);

        let genome = substrate.generate_genome(&mut genotype).unwrap();
        let serialized = serde_json::to_string(&genome).unwrap();
        let deserialized: SubstrateGenome = serde_json::from_str(&serialized).unwrap();

        assert_eq!(genome, deserialized);
    }
}
