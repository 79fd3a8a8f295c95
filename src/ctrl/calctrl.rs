use crate::calendar;
use crate::cmds::{Cmd, CmdResult};
use crate::context::Context;
use crate::ctrl::Control;

pub struct CalendarController {}

impl Default for CalendarController {
    fn default() -> Self {
        CalendarController {}
    }
}

impl Control for CalendarController {
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut Context) -> CmdResult {
        match cmd {
            Cmd::NextMonth => {
                context.cursor = calendar::next_month(context.cursor);
                Ok(Cmd::Noop)
            }
            Cmd::PrevMonth => {
                context.cursor = calendar::prev_month(context.cursor);
                Ok(Cmd::Noop)
            }
            Cmd::Today => {
                context.select_today();
                Ok(Cmd::Noop)
            }
            _ => Ok(*cmd),
        }
    }
}
