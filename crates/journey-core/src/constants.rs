//! Constantes del motor de journeys.
//!
//! Este módulo agrupa las etiquetas de estado y los valores estructurales que
//! comparten el motor y sus consumidores. Las etiquetas son informales por
//! diseño (el aggregate las guarda como `String`); centralizarlas aquí evita
//! divergencias de escritura entre variantes.

/// Estado inicial de un journey recién creado.
pub const STATUS_STARTED: &str = "Started";

/// Estado de un journey con al menos un step enviado por el member.
pub const STATUS_IN_PROGRESS: &str = "InProgress";

/// Estado final tras `submit`.
pub const STATUS_SUBMITTED: &str = "Submitted";

/// Estado de expiración. Minúscula por compatibilidad con el vocabulario
/// histórico de los consumidores.
pub const STATUS_EXPIRED: &str = "expired";

/// Separador de la lista de wording flags serializada.
pub const WORDING_FLAG_SEPARATOR: char = ';';

/// Número de secuencia de la rama inicial de todo journey.
pub const FIRST_BRANCH_SEQUENCE: u32 = 1;

/// Número de secuencia del primer step de toda rama (1-based, sin huecos).
pub const FIRST_STEP_SEQUENCE: u32 = 1;
