use crate::agenda::SortOrder;
use crate::cmds::{Cmd, CmdResult};
use crate::context::Context;
use crate::ctrl::Control;

pub struct EventListController {}

impl Default for EventListController {
    fn default() -> Self {
        EventListController {}
    }
}

impl Control for EventListController {
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut Context) -> CmdResult {
        use Cmd::*;
        match cmd {
            SortByDate => context.sort = SortOrder::Date,
            SortByCategory => context.sort = SortOrder::Category,
            _ => {}
        }

        Ok(Cmd::Noop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn sort_commands_switch_the_order() {
        let mut ctrl = EventListController::default();
        let mut context = Context::new(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        assert_eq!(context.sort, SortOrder::Date);

        ctrl.send_cmd(&Cmd::SortByCategory, &mut context).unwrap();
        assert_eq!(context.sort, SortOrder::Category);

        ctrl.send_cmd(&Cmd::SortByDate, &mut context).unwrap();
        assert_eq!(context.sort, SortOrder::Date);
    }

    #[test]
    fn navigation_commands_leave_sort_untouched() {
        let mut ctrl = EventListController::default();
        let mut context = Context::new(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        context.sort = SortOrder::Category;

        ctrl.send_cmd(&Cmd::NextMonth, &mut context).unwrap();
        assert_eq!(context.sort, SortOrder::Category);
    }
}
