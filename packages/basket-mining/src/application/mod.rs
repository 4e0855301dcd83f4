/*
 * Application Layer - Use cases
 *
 * - mining_usecase : one configured pass (mine + rules + stats)
 * - comparison     : both miners side by side
 */

pub mod comparison;
pub mod mining_usecase;

pub use comparison::{compare_miners, MinerComparison, MinerSummary};
pub use mining_usecase::{
    miner_for, MiningInput, MiningOutput, MiningStats, MiningUseCase, MiningUseCaseImpl,
};
