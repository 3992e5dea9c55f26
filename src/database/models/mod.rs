//! Domain tables and views, one entity per file.

pub mod change_log;
pub mod estudiante_obtiene_grado;
pub mod ies_preg_posg;
pub mod informacion_cambio_pensum;
pub mod informacion_deudores;
pub mod informacion_personal;
pub mod informacion_programas_academicos;
pub mod programas_preg_posg;
pub mod prorroga_periodo_de_gracia;
pub mod reintegros;
pub mod renovaciones_extemporaneas;
pub mod renuncia_giros;
pub mod renuncia_modalidad;
pub mod renuncia_o_terminacion;
pub mod suspension_especial;
pub mod suspension_temporal;
pub mod usuarios;
pub mod vw_giros_general_historico_ies;

pub use change_log::ChangeLog;
pub use estudiante_obtiene_grado::EstudianteObtieneGrado;
pub use ies_preg_posg::IesPregPosg;
pub use informacion_cambio_pensum::InformacionCambioPensum;
pub use informacion_deudores::InformacionDeudores;
pub use informacion_personal::InformacionPersonal;
pub use informacion_programas_academicos::InformacionProgramasAcademicos;
pub use programas_preg_posg::ProgramasPregPosg;
pub use prorroga_periodo_de_gracia::ProrrogaPeriodoDeGracia;
pub use reintegros::Reintegros;
pub use renovaciones_extemporaneas::RenovacionesExtemporaneas;
pub use renuncia_giros::RenunciaGiros;
pub use renuncia_modalidad::RenunciaModalidad;
pub use renuncia_o_terminacion::RenunciaOTerminacion;
pub use suspension_especial::SuspensionEspecial;
pub use suspension_temporal::SuspensionTemporal;
pub use usuarios::{Usuario, UsuarioCreate, UsuarioUpdate};
pub use vw_giros_general_historico_ies::VwGirosGeneralHistoricoIes;
