use crate::validation::ValidationError;
use log::warn;

/// Tells the user that a submitted form was rejected.
///
/// Hosts implement this with whatever blocking notification they have (an alert box,
/// a console message, inline text). `report` is called synchronously, once per failed
/// submission, before `Tracker::submit` returns.
pub trait Notifier {
    fn report(&mut self, error: &ValidationError);
}

/// Reports rejections through the `log` facade
#[derive(Debug, Default)]
pub struct LogNotifier;

/// Keeps every reported rejection, for hosts that render messages inline
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    reported: Vec<ValidationError>,
}

impl Notifier for LogNotifier {
    fn report(&mut self, error: &ValidationError) {
        warn!("{}", error.user_message());
    }
}

impl RecordingNotifier {
    pub fn reported(&self) -> &[ValidationError] {
        &self.reported
    }

    pub fn last(&self) -> Option<&ValidationError> {
        self.reported.last()
    }

    pub fn clear(&mut self) {
        self.reported.clear();
    }
}

impl Notifier for RecordingNotifier {
    fn report(&mut self, error: &ValidationError) {
        self.reported.push(*error);
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn report(&mut self, error: &ValidationError) {
        (**self).report(error);
    }
}
