// ============================================================================
// OPTIMIZATION SERVICE - Orden de waypoints con algoritmo genético
// ============================================================================
// Origen y destino quedan fijos; solo se permutan los lugares intermedios.
// Fitness = distancia (peso 0.9) + seguridad CSI (peso 0.1).
// ============================================================================

use rand::distributions::WeightedIndex;
use rand::prelude::*;

use crate::config::OptimizerConfig;
use crate::models::Stop;
use crate::utils::constants::PLACE_SEPARATOR;

#[derive(Debug, Clone, PartialEq)]
pub enum OptimizationError {
    TooFewStops { found: usize },
    InvalidCoordinates { name: String },
    /// El nombre no puede volver a guardarse como lista separada por comas
    NameContainsSeparator { name: String },
    InvalidJson(String),
}

impl std::fmt::Display for OptimizationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptimizationError::TooFewStops { found } => write!(
                f,
                "At least two stops are required (origin and destination), found {}",
                found
            ),
            OptimizationError::InvalidCoordinates { name } => {
                write!(f, "Stop \"{}\" has invalid coordinates", name)
            }
            OptimizationError::NameContainsSeparator { name } => {
                write!(f, "Stop \"{}\" contains '{}'", name, PLACE_SEPARATOR)
            }
            OptimizationError::InvalidJson(msg) => write!(f, "Invalid stops JSON: {}", msg),
        }
    }
}

impl std::error::Error for OptimizationError {}

impl From<OptimizationError> for wasm_bindgen::JsValue {
    fn from(e: OptimizationError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

/// Distancia euclidiana entre coordenadas (en grados, solo para comparar rutas)
pub fn distance_between(a: &Stop, b: &Stop) -> f64 {
    ((a.latitude - b.latitude).powi(2) + (a.longitude - b.longitude).powi(2)).sqrt()
}

/// Rutas más cortas → puntaje más alto (`lugares / distancia total`)
pub fn distance_score(route: &[&Stop]) -> f64 {
    let total: f64 = route
        .windows(2)
        .fold(0.0, |acc, pair| acc + distance_between(pair[0], pair[1]));
    if total > 0.0 {
        route.len() as f64 / total
    } else {
        // Todos los lugares en el mismo punto: cualquier orden da lo mismo
        route.len() as f64 + 1.0
    }
}

/// Mejor puntaje cuando los lugares más peligrosos (CSI alto) se visitan antes.
/// `desorden` = pares (i < j) con csi[i] < csi[j].
pub fn safety_score(route: &[&Stop]) -> f64 {
    let csi: Vec<f64> = route.iter().map(|stop| stop.csi()).collect();
    let disorder = (0..csi.len())
        .flat_map(|i| (i + 1..csi.len()).map(move |j| (i, j)))
        .filter(|&(i, j)| csi[i] < csi[j])
        .count();

    if disorder == 0 {
        route.len() as f64 + 1.0
    } else {
        route.len() as f64 / disorder as f64
    }
}

pub fn fitness_score(route: &[&Stop], config: &OptimizerConfig) -> f64 {
    distance_score(route) * config.distance_weight + safety_score(route) * config.safety_weight
}

/// Partially mapped crossover (PMX) sobre permutaciones de `0..len`
pub fn partially_mapped_crossover<R: Rng + ?Sized>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let len = parent1.len();
    if len < 2 {
        return parent1.to_vec();
    }

    let start = rng.gen_range(0..len);
    let end = rng.gen_range(start..len);
    crossover_with_segment(parent1, parent2, start, end)
}

/// PMX con el segmento `[start, end]` de `parent1` ya elegido
fn crossover_with_segment(parent1: &[usize], parent2: &[usize], start: usize, end: usize) -> Vec<usize> {
    let len = parent1.len();
    let in_segment = |pos: usize| pos >= start && pos <= end;

    // position_in_p2[gene] = índice del gen en parent2
    let mut position_in_p2 = vec![0; len];
    for (index, &gene) in parent2.iter().enumerate() {
        position_in_p2[gene] = index;
    }

    let mut child: Vec<Option<usize>> = vec![None; len];
    for pos in start..=end {
        child[pos] = Some(parent1[pos]);
    }

    for pos in start..=end {
        let gene = parent2[pos];
        if parent1[start..=end].contains(&gene) {
            continue;
        }
        let mut target = pos;
        while in_segment(target) {
            target = position_in_p2[parent1[target]];
        }
        child[target] = Some(gene);
    }

    child
        .into_iter()
        .zip(parent2)
        .map(|(gene, &fallback)| gene.unwrap_or(fallback))
        .collect()
}

pub struct OptimizationService;

impl OptimizationService {
    /// Reordenar los waypoints. Devuelve origen + waypoints ordenados + destino.
    pub fn optimize<R: Rng + ?Sized>(
        stops: &[Stop],
        config: &OptimizerConfig,
        rng: &mut R,
    ) -> Result<Vec<Stop>, OptimizationError> {
        Self::validate(stops)?;

        let origin = &stops[0];
        let destination = &stops[stops.len() - 1];
        let waypoints = &stops[1..stops.len() - 1];

        if waypoints.len() < 2 {
            return Ok(stops.to_vec());
        }

        let fitness = |order: &[usize]| -> f64 {
            let route: Vec<&Stop> = std::iter::once(origin)
                .chain(order.iter().map(|&i| &waypoints[i]))
                .chain(std::iter::once(destination))
                .collect();
            fitness_score(&route, config)
        };

        let population_size = config.population_size.max(2);
        let mut population: Vec<Vec<usize>> = (0..population_size)
            .map(|_| {
                let mut order: Vec<usize> = (0..waypoints.len()).collect();
                order.shuffle(rng);
                order
            })
            .collect();

        // El orden de entrada compite con la población
        let mut best: Vec<usize> = (0..waypoints.len()).collect();
        let mut best_fitness = fitness(&best);

        for generation in 0..config.generations {
            let scores: Vec<f64> = population.iter().map(|order| fitness(order)).collect();
            Self::keep_best(&population, &scores, &mut best, &mut best_fitness);

            let pool = Self::roulette_wheel_selection(&population, &scores, population_size / 2, rng);
            population = (0..population_size)
                .map(|_| {
                    let parent1 = &pool[rng.gen_range(0..pool.len())];
                    let parent2 = &pool[rng.gen_range(0..pool.len())];
                    partially_mapped_crossover(parent1, parent2, rng)
                })
                .collect();

            if generation % 100 == 0 {
                log::debug!("🧬 [OPTIMIZER] Generación {}: mejor fitness {:.4}", generation, best_fitness);
            }
        }

        let scores: Vec<f64> = population.iter().map(|order| fitness(order)).collect();
        Self::keep_best(&population, &scores, &mut best, &mut best_fitness);

        log::info!("✅ [OPTIMIZER] {} waypoints ordenados, fitness {:.4}", waypoints.len(), best_fitness);

        Ok(std::iter::once(origin.clone())
            .chain(best.iter().map(|&i| waypoints[i].clone()))
            .chain(std::iter::once(destination.clone()))
            .collect())
    }

    /// JSON `[{name, latitude, longitude, city?}]` → "A,B,C" listo para localStorage
    pub fn optimize_json<R: Rng + ?Sized>(
        stops_json: &str,
        config: &OptimizerConfig,
        rng: &mut R,
    ) -> Result<String, OptimizationError> {
        let stops: Vec<Stop> =
            serde_json::from_str(stops_json).map_err(|e| OptimizationError::InvalidJson(e.to_string()))?;
        let ordered = Self::optimize(&stops, config, rng)?;
        Ok(ordered
            .iter()
            .map(|stop| stop.name.as_str())
            .collect::<Vec<_>>()
            .join(&PLACE_SEPARATOR.to_string()))
    }

    fn validate(stops: &[Stop]) -> Result<(), OptimizationError> {
        if stops.len() < 2 {
            return Err(OptimizationError::TooFewStops { found: stops.len() });
        }
        for stop in stops {
            if !stop.has_valid_coordinates() {
                return Err(OptimizationError::InvalidCoordinates { name: stop.name.clone() });
            }
            if stop.name.contains(PLACE_SEPARATOR) {
                return Err(OptimizationError::NameContainsSeparator { name: stop.name.clone() });
            }
        }
        Ok(())
    }

    fn keep_best(population: &[Vec<usize>], scores: &[f64], best: &mut Vec<usize>, best_fitness: &mut f64) {
        for (order, &score) in population.iter().zip(scores) {
            if score > *best_fitness {
                *best_fitness = score;
                *best = order.clone();
            }
        }
    }

    /// Probabilidad de selección proporcional al fitness
    fn roulette_wheel_selection<R: Rng + ?Sized>(
        population: &[Vec<usize>],
        scores: &[f64],
        count: usize,
        rng: &mut R,
    ) -> Vec<Vec<usize>> {
        let count = count.max(1);
        match WeightedIndex::<f64>::new(scores) {
            Ok(wheel) => (0..count).map(|_| population[wheel.sample(rng)].clone()).collect(),
            Err(e) => {
                log::warn!("⚠️ [OPTIMIZER] Pesos inválidos ({}), selección uniforme", e);
                (0..count)
                    .map(|_| population[rng.gen_range(0..population.len())].clone())
                    .collect()
            }
        }
    }
}
