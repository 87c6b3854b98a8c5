use life_core::GridError;
use life_render::SurfaceError;
use life_services::SettingsError;
use thiserror::Error;

/// Errors that can occur while constructing a controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
