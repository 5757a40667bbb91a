use super::commands::UnitOfMeasureCommand;
use super::model::UnitOfMeasure;

impl From<&UnitOfMeasure> for UnitOfMeasureCommand {
    fn from(uom: &UnitOfMeasure) -> Self {
        Self {
            id: uom.id.clone(),
            description: uom.description.clone(),
        }
    }
}

impl From<&UnitOfMeasureCommand> for UnitOfMeasure {
    fn from(command: &UnitOfMeasureCommand) -> Self {
        Self {
            id: command.unit_id().map(str::to_string),
            description: command.description.clone(),
        }
    }
}
