//! Vetor de estado puro de n qubits
//!
//! O bit k do índice i codifica o valor do qubit k (qubit 0 = bit menos
//! significativo). Todas as transformações recebem `&self` e devolvem um
//! novo `StateVector`: o vetor do chamador nunca é alterado, então um
//! mesmo estado pode ser lido por várias threads sem trava.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::complex::{Complex, ONE, ZERO};
use crate::config::{self, SimulatorConfig, INTERACTIVE_QUBITS};
use crate::error::{QuantumError, QuantumResult};
use crate::gates::{Gate, StandardGate};

/// Magnitude e fase de uma amplitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeInfo {
    /// |amp|
    pub magnitude: f64,
    /// arg(amp) em (−π, π]
    pub phase: f64,
}

/// Vetor de Bloch (x, y, z)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BlochVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl BlochVector {
    /// Cria vetor de Bloch
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Comprimento (1 = estado puro, < 1 = misto)
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Compara componente a componente
    pub fn approx_eq(&self, other: &BlochVector, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }
}

/// Número de qubits para um vetor de comprimento `len`
///
/// Falha se `len` não for potência de dois não nula.
pub fn num_qubits_for_dimension(len: usize) -> QuantumResult<usize> {
    if len == 0 || !len.is_power_of_two() {
        return Err(QuantumError::InvalidDimension(len));
    }
    Ok(len.trailing_zeros() as usize)
}

/// Rótulo binário com zeros à esquerda, qubit n−1 primeiro
pub fn basis_label(index: usize, num_qubits: usize) -> String {
    format!("{:0width$b}", index, width = num_qubits)
}

fn check_qubit_count(num_qubits: usize, config: &SimulatorConfig) -> QuantumResult<()> {
    if num_qubits == 0 {
        return Err(QuantumError::NoQubits);
    }
    let ceiling = config.qubit_ceiling();
    if num_qubits > ceiling {
        return Err(QuantumError::TooManyQubits {
            requested: num_qubits,
            max: ceiling,
        });
    }
    if num_qubits > INTERACTIVE_QUBITS {
        tracing::warn!(
            qubits = num_qubits,
            dimension = 1usize << num_qubits,
            "state vector beyond interactive size"
        );
    }
    Ok(())
}

/// Estado puro de um registrador de n qubits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Complex>", into = "Vec<Complex>")]
pub struct StateVector {
    amplitudes: Vec<Complex>,
    num_qubits: usize,
}

impl StateVector {
    /// Cria |0…0⟩ com n qubits
    pub fn zero(num_qubits: usize) -> QuantumResult<Self> {
        Self::zero_with(num_qubits, &config::SIMULATOR)
    }

    /// Cria |0…0⟩ com um limite explícito
    pub fn zero_with(num_qubits: usize, config: &SimulatorConfig) -> QuantumResult<Self> {
        Self::basis_with(num_qubits, 0, config)
    }

    /// Cria o estado da base computacional |index⟩
    pub fn basis(num_qubits: usize, index: usize) -> QuantumResult<Self> {
        Self::basis_with(num_qubits, index, &config::SIMULATOR)
    }

    fn basis_with(
        num_qubits: usize,
        index: usize,
        config: &SimulatorConfig,
    ) -> QuantumResult<Self> {
        check_qubit_count(num_qubits, config)?;
        let dimension = 1usize << num_qubits;
        if index >= dimension {
            return Err(QuantumError::BasisIndexOutOfRange { index, dimension });
        }

        let mut amplitudes = vec![ZERO; dimension];
        amplitudes[index] = ONE;
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Cria a partir de amplitudes (comprimento deve ser 2ⁿ)
    ///
    /// A normalização não é imposta; use [`StateVector::is_normalized`].
    pub fn from_amplitudes(amplitudes: Vec<Complex>) -> QuantumResult<Self> {
        let num_qubits = num_qubits_for_dimension(amplitudes.len())?;
        check_qubit_count(num_qubits, &config::SIMULATOR)?;
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Número de qubits
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Comprimento 2ⁿ
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Amplitudes
    pub fn amplitudes(&self) -> &[Complex] {
        &self.amplitudes
    }

    /// Amplitude do índice
    pub fn amplitude(&self, index: usize) -> QuantumResult<Complex> {
        self.amplitudes
            .get(index)
            .copied()
            .ok_or(QuantumError::BasisIndexOutOfRange {
                index,
                dimension: self.dimension(),
            })
    }

    /// Consome o estado e devolve as amplitudes
    pub fn into_amplitudes(self) -> Vec<Complex> {
        self.amplitudes
    }

    /// Novo estado com `f(índice, amplitude)` aplicada a cada amplitude
    ///
    /// O comprimento é preservado; a normalização fica a cargo de `f`.
    pub fn map_amplitudes<F>(&self, mut f: F) -> Self
    where
        F: FnMut(usize, Complex) -> Complex,
    {
        let amplitudes = self
            .amplitudes
            .iter()
            .enumerate()
            .map(|(i, &amp)| f(i, amp))
            .collect();
        self.with_amplitudes(amplitudes)
    }

    /// Verifica se `qubit` pertence ao registrador
    pub fn check_qubit(&self, qubit: usize) -> QuantumResult<()> {
        if qubit >= self.num_qubits {
            return Err(QuantumError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(())
    }

    fn check_pair(&self, a: usize, b: usize) -> QuantumResult<()> {
        self.check_qubit(a)?;
        self.check_qubit(b)?;
        if a == b {
            return Err(QuantumError::SameQubit(a));
        }
        Ok(())
    }

    fn with_amplitudes(&self, amplitudes: Vec<Complex>) -> Self {
        Self {
            amplitudes,
            num_qubits: self.num_qubits,
        }
    }

    /// Aplica uma porta 2×2 ao qubit `target`
    ///
    /// Percorre os pares (i, j) que diferem só no bit `target` e faz a
    /// atualização borboleta, sem montar o operador 2ⁿ×2ⁿ.
    /// O(2ⁿ) em tempo e memória.
    pub fn apply_gate(&self, gate: &Gate, target: usize) -> QuantumResult<Self> {
        self.check_qubit(target)?;

        let mask = 1usize << target;
        let [[g00, g01], [g10, g11]] = gate.elements;
        let old = &self.amplitudes;
        let mut new = old.clone();

        for i in (0..old.len()).filter(|i| i & mask == 0) {
            let j = i | mask;
            let (a, b) = (old[i], old[j]);
            new[i] = g00 * a + g01 * b;
            new[j] = g10 * a + g11 * b;
        }

        Ok(self.with_amplitudes(new))
    }

    /// Aplica uma porta nomeada do catálogo
    pub fn apply(&self, gate: StandardGate, target: usize) -> QuantumResult<Self> {
        self.apply_gate(&gate.matrix(), target)
    }

    /// CNOT: troca as amplitudes dos pares com bit de controle 1
    pub fn apply_cnot(&self, control: usize, target: usize) -> QuantumResult<Self> {
        self.check_pair(control, target)?;

        let c_mask = 1usize << control;
        let t_mask = 1usize << target;
        let mut new = self.amplitudes.clone();

        // Cada par com controle = 1 é visitado uma vez, pelo índice com alvo = 0
        for i in (0..new.len()).filter(|i| i & c_mask != 0 && i & t_mask == 0) {
            new.swap(i, i | t_mask);
        }

        Ok(self.with_amplitudes(new))
    }

    /// CZ: inverte o sinal quando os dois bits valem 1
    pub fn apply_cz(&self, a: usize, b: usize) -> QuantumResult<Self> {
        self.check_pair(a, b)?;

        let mask = (1usize << a) | (1usize << b);
        let new = self
            .amplitudes
            .iter()
            .enumerate()
            .map(|(i, &amp)| if i & mask == mask { -amp } else { amp })
            .collect();

        Ok(self.with_amplitudes(new))
    }

    /// SWAP entre os qubits `a` e `b`
    pub fn apply_swap(&self, a: usize, b: usize) -> QuantumResult<Self> {
        self.check_pair(a, b)?;

        let a_mask = 1usize << a;
        let b_mask = 1usize << b;
        let mut new = self.amplitudes.clone();

        for i in (0..new.len()).filter(|i| i & a_mask != 0 && i & b_mask == 0) {
            new.swap(i, i ^ a_mask ^ b_mask);
        }

        Ok(self.with_amplitudes(new))
    }

    /// |amp|² por índice
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// |amp|² de um índice
    pub fn probability(&self, index: usize) -> QuantumResult<f64> {
        self.amplitude(index).map(|a| a.norm_sqr())
    }

    /// Σ|amp|²
    pub fn norm_squared(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Verifica normalização com a tolerância configurada
    pub fn is_normalized(&self) -> bool {
        self.is_normalized_within(config::norm_tolerance())
    }

    /// Verifica normalização com tolerância explícita
    pub fn is_normalized_within(&self, tolerance: f64) -> bool {
        (self.norm_squared() - 1.0).abs() <= tolerance
    }

    /// Magnitude e fase de cada amplitude
    pub fn amplitude_info(&self) -> Vec<AmplitudeInfo> {
        self.amplitudes
            .iter()
            .map(|a| AmplitudeInfo {
                magnitude: a.norm(),
                phase: a.arg(),
            })
            .collect()
    }

    /// Rótulos binários de todos os índices
    pub fn basis_labels(&self) -> Vec<String> {
        (0..self.dimension())
            .map(|i| basis_label(i, self.num_qubits))
            .collect()
    }

    /// ⟨self|other⟩
    pub fn inner_product(&self, other: &StateVector) -> QuantumResult<Complex> {
        if self.dimension() != other.dimension() {
            return Err(QuantumError::DimensionMismatch {
                expected: self.dimension(),
                actual: other.dimension(),
            });
        }
        Ok(self
            .amplitudes
            .iter()
            .zip(&other.amplitudes)
            .map(|(a, b)| a.conj() * b)
            .sum())
    }

    /// Fidelidade |⟨self|other⟩|²
    pub fn fidelity(&self, other: &StateVector) -> QuantumResult<f64> {
        self.inner_product(other).map(|p| p.norm_sqr())
    }

    /// Amostragem por CDF inversa para um sorteio uniforme `u` ∈ [0, 1)
    ///
    /// Se o arredondamento deixar `u` acima da soma acumulada final,
    /// devolve o último índice com probabilidade não nula.
    pub fn sample_index(&self, u: f64) -> usize {
        let mut cumulative = 0.0;
        let mut last_nonzero = 0;

        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if p > 0.0 {
                last_nonzero = i;
            }
            cumulative += p;
            if u < cumulative {
                return i;
            }
        }

        last_nonzero
    }

    /// Mede todos os qubits com a fonte aleatória injetada
    ///
    /// Não colapsa o estado; devolve apenas o índice sorteado.
    pub fn measure<R: Rng>(&self, rng: &mut R) -> usize {
        let u: f64 = rng.gen_range(0.0..1.0);
        let outcome = self.sample_index(u);
        tracing::debug!(outcome, draw = u, "measured basis state");
        outcome
    }

    /// Coordenadas de Bloch de um estado de um qubit
    ///
    /// x = 2 Re(α*β), y = 2 Im(α*β), z = |α|² − |β|²
    pub fn bloch_coords(&self) -> QuantumResult<BlochVector> {
        if self.dimension() != 2 {
            return Err(QuantumError::NotSingleQubit(self.dimension()));
        }
        let (alpha, beta) = (self.amplitudes[0], self.amplitudes[1]);
        let coherence = alpha.conj() * beta;
        Ok(BlochVector::new(
            2.0 * coherence.re,
            2.0 * coherence.im,
            alpha.norm_sqr() - beta.norm_sqr(),
        ))
    }
}

impl TryFrom<Vec<Complex>> for StateVector {
    type Error = QuantumError;

    fn try_from(amplitudes: Vec<Complex>) -> QuantumResult<Self> {
        Self::from_amplitudes(amplitudes)
    }
}

impl From<StateVector> for Vec<Complex> {
    fn from(state: StateVector) -> Self {
        state.amplitudes
    }
}
