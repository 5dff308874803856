use crate::config::AppConfig;
use crate::errors::AppError;
use crate::services::composer::BookingMessageComposer;
use crate::services::controller::InputController;
use crate::services::dispatch::SubmitDispatcher;
use crate::services::slots::SlotSchedule;

pub struct AppState {
    pub config: AppConfig,
    pub controller: InputController,
    pub dispatcher: SubmitDispatcher,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let schedule = SlotSchedule::new(config.open_hour, config.close_hour, config.trim_last_slot)?;
        let slots = schedule.generate();
        tracing::debug!(count = slots.len(), "generated booking slots");

        let composer = BookingMessageComposer::new(&config.business_name, &config.site_tag);
        let dispatcher = SubmitDispatcher::new(
            composer,
            &config.whatsapp_number,
            &config.sms_number,
            slots.clone(),
        );

        Ok(Self {
            controller: InputController::new(slots),
            dispatcher,
            config,
        })
    }
}
