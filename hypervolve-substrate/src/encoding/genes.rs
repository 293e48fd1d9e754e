use crate::Innovation;

use hypervolve::ActivationType;

use serde::{Deserialize, Serialize};

use std::fmt;

/// A NodeType indicates the function of the neuron's
/// network equivalent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    /// Input nodes.
    Sensor,
    /// Hidden nodes.
    Neuron,
    /// Output nodes.
    Actuator,
}

/// A neuron slot in a substrate, and in the phenotype genomes
/// generated from it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct NeuronGene {
    id: Innovation,
    node_type: NodeType,
    activation: ActivationType,
}

impl NeuronGene {
    /// Returns a new neuron gene with the specified parameters.
    ///
    /// # Examples
    /// ```
    /// use hypervolve::ActivationType;
    /// use hypervolve_substrate::encoding::{NeuronGene, NodeType};
    ///
    /// let neuron = NeuronGene::new(3, NodeType::Neuron, ActivationType::Sigmoid);
    ///
    /// assert_eq!(neuron.innovation(), 3);
    /// assert_eq!(neuron.node_type(), NodeType::Neuron);
    /// ```
    pub fn new(id: Innovation, node_type: NodeType, activation: ActivationType) -> NeuronGene {
        NeuronGene {
            id,
            node_type,
            activation,
        }
    }

    /// Returns the neuron's innovation number.
    pub fn innovation(&self) -> Innovation {
        self.id
    }

    /// Returns the neuron's node type.
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// Returns the neuron's activation type.
    pub fn activation(&self) -> ActivationType {
        self.activation
    }
}

impl fmt::Display for NeuronGene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}[{:?}]", self.id, self.node_type)
    }
}

/// A directed, weighted connection between two neurons of a
/// phenotype genome, identified by their global indices.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ConnectionGene {
    id: Innovation,
    source: Innovation,
    target: Innovation,
    weight: f32,
}

impl ConnectionGene {
    /// Returns a new connection gene with the specified parameters.
    ///
    /// # Examples
    /// ```
    /// use hypervolve_substrate::encoding::ConnectionGene;
    ///
    /// let connection = ConnectionGene::new(0, 3, 9, -2.0);
    ///
    /// assert_eq!(connection.source(), 3);
    /// assert_eq!(connection.target(), 9);
    /// assert_eq!(connection.weight(), -2.0);
    /// ```
    pub fn new(id: Innovation, source: Innovation, target: Innovation, weight: f32) -> ConnectionGene {
        ConnectionGene {
            id,
            source,
            target,
            weight,
        }
    }

    /// Returns the connection's innovation number.
    pub fn innovation(&self) -> Innovation {
        self.id
    }

    /// Returns the global index of the connection's source neuron.
    pub fn source(&self) -> Innovation {
        self.source
    }

    /// Returns the global index of the connection's target neuron.
    pub fn target(&self) -> Innovation {
        self.target
    }

    /// Returns the connection's weight.
    pub fn weight(&self) -> f32 {
        self.weight
    }
}

impl fmt::Display for ConnectionGene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}[{:?}->{:?}, {:.3}]",
            self.id, self.source, self.target, self.weight
        )
    }
}

/// A phenotype genome produced by substrate encoding: the
/// substrate's neuron list together with a freshly generated
/// connection list.
///
/// Supports Serde for convenient genome saving and loading. The
/// genome itself holds no signal state; decoding it into an
/// executable network is the concern of a network implementation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SubstrateGenome {
    id: Innovation,
    neurons: Vec<NeuronGene>,
    connections: Vec<ConnectionGene>,
    input_count: usize,
    output_count: usize,
}

impl SubstrateGenome {
    /// Assembles a genome from its parts. Connection innovation
    /// numbers are expected to be sequential from zero.
    pub fn new(
        id: Innovation,
        neurons: Vec<NeuronGene>,
        connections: Vec<ConnectionGene>,
        input_count: usize,
        output_count: usize,
    ) -> SubstrateGenome {
        SubstrateGenome {
            id,
            neurons,
            connections,
            input_count,
            output_count,
        }
    }

    /// Returns the genome's identifier.
    pub fn id(&self) -> Innovation {
        self.id
    }

    /// Returns the genome's neurons, ordered inputs, then outputs,
    /// then hidden.
    pub fn neurons(&self) -> &[NeuronGene] {
        &self.neurons
    }

    /// Returns the genome's connections, in generation order.
    pub fn connections(&self) -> &[ConnectionGene] {
        &self.connections
    }

    /// Number of input neurons.
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// Number of output neurons.
    pub fn output_count(&self) -> usize {
        self.output_count
    }
}

impl fmt::Display for SubstrateGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Genome {:?}: {} neurons, {} connections",
            self.id,
            self.neurons.len(),
            self.connections.len()
        )
    }
}
