//! # Circuito — sequência de operações sobre o registrador
//!
//! Cada cena da visualização é descrita como uma lista de portas e CNOTs
//! aplicada a partir de um estado inicial.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  Circuit                     │
//! │  ┌────────────────────────────────────────┐  │
//! │  │  Operation::Gate { gate, target }      │  │
//! │  │  Operation::Cnot { control, target }   │  │
//! │  └────────────────────────────────────────┘  │
//! │          │ run(&StateVector)                 │
//! │          ▼                                   │
//! │  StateVector (novo; a entrada não muda)      │
//! └──────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::QuantumResult;
use crate::gates::{Gate, StandardGate};
use crate::state::StateVector;

/// Uma operação do circuito
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Porta de um qubit
    Gate { gate: StandardGate, target: usize },
    /// CNOT
    Cnot { control: usize, target: usize },
}

impl Operation {
    /// Aplica a operação, devolvendo novo estado
    pub fn apply(&self, state: &StateVector) -> QuantumResult<StateVector> {
        match *self {
            Self::Gate { gate, target } => state.apply(gate, target),
            Self::Cnot { control, target } => state.apply_cnot(control, target),
        }
    }
}

/// Circuito quântico composto de múltiplas operações
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    operations: Vec<Operation>,
}

impl Circuit {
    /// Cria circuito vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona porta ao circuito
    pub fn gate(&mut self, gate: StandardGate, target: usize) -> &mut Self {
        self.operations.push(Operation::Gate { gate, target });
        self
    }

    /// Adiciona CNOT ao circuito
    pub fn cnot(&mut self, control: usize, target: usize) -> &mut Self {
        self.operations.push(Operation::Cnot { control, target });
        self
    }

    /// Retorna número de operações
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Verifica se circuito está vazio
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Retorna referência às operações
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Executa o circuito sobre `initial`
    ///
    /// Para na primeira operação inválida.
    pub fn run(&self, initial: &StateVector) -> QuantumResult<StateVector> {
        let mut current = initial.clone();
        for op in &self.operations {
            current = op.apply(&current)?;
        }
        Ok(current)
    }

    /// Matriz composta de um circuito só com portas em um mesmo qubit
    ///
    /// `None` se o circuito estiver vazio, tiver CNOT ou tocar mais de um qubit.
    pub fn single_qubit_matrix(&self) -> Option<Gate> {
        let mut target = None;
        let mut result = Gate::I;

        for op in &self.operations {
            let Operation::Gate { gate, target: t } = *op else {
                return None;
            };
            if *target.get_or_insert(t) != t {
                return None;
            }
            result = gate.matrix().mul(&result);
        }

        target.map(|_| result)
    }
}

impl FromIterator<Operation> for Circuit {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}
