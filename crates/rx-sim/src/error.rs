use rx_core::{ParticleId, RxError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] RxError),

    #[error("{id} at ({x}, {y}) does not fit inside the {width}×{height} world")]
    ParticleOutOfBounds {
        id:     ParticleId,
        x:      f32,
        y:      f32,
        width:  f32,
        height: f32,
    },

    #[error("{id} has a non-finite position or velocity")]
    NonFiniteState { id: ParticleId },

    #[error("{id} carries {methyl_count} methyl groups; an amine holds at most {max}")]
    InvalidParticle { id: ParticleId, methyl_count: u8, max: u8 },
}

pub type SimResult<T> = Result<T, SimError>;
