pub mod calctrl;
pub mod evtlistctrl;

pub use calctrl::CalendarController;
pub use evtlistctrl::EventListController;

use crate::cmds::{Cmd, CmdResult};
use crate::context::Context;

pub trait Control {
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut Context) -> CmdResult;
}
