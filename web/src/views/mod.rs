mod shell;
pub use shell::AppShell;

mod protected;
pub use protected::Protected;

mod home;
pub use home::{Home, NotFound};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::Profile;

mod dashboard;
pub use dashboard::Dashboard;

mod formularios_list;
pub use formularios_list::FormulariosList;

mod formulario_detail;
pub use formulario_detail::FormularioDetail;

mod formulario_form;
pub use formulario_form::{FormularioCreate, FormularioEdit};

mod comunicados_list;
pub use comunicados_list::ComunicadosList;

mod comunicado_detail;
pub use comunicado_detail::ComunicadoDetail;

mod comunicado_form;
pub use comunicado_form::{ComunicadoCreate, ComunicadoEdit};
