// Presentation layer: everything that talks to a console lives here.
// The core roster types never depend on this module.

pub mod console;
pub mod menu;
