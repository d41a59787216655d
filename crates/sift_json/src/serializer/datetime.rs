use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use sift_reflect::Reflect;

use crate::serializer::Serializer;
use crate::{Output, SerializeError};

/// Writes a zoned `chrono` date-time as milliseconds since the Unix epoch.
///
/// Accepts `DateTime<Utc>`, `DateTime<Local>` and `DateTime<FixedOffset>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeSerializer;

impl Serializer for DateTimeSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let millis = if let Some(v) = value.downcast_ref::<DateTime<Utc>>() {
            v.timestamp_millis()
        } else if let Some(v) = value.downcast_ref::<DateTime<Local>>() {
            v.timestamp_millis()
        } else if let Some(v) = value.downcast_ref::<DateTime<FixedOffset>>() {
            v.timestamp_millis()
        } else {
            return Err(SerializeError::mismatch("a chrono DateTime", value));
        };
        output.write_i64(millis)?;
        Ok(())
    }
}

// A naive date-time read as local time. In a DST gap there is no such local
// time, and the value is read as UTC instead.
fn local_millis(naive: &NaiveDateTime) -> i64 {
    match Local.from_local_datetime(naive).earliest() {
        Some(local) => local.timestamp_millis(),
        None => naive.and_utc().timestamp_millis(),
    }
}

/// Writes a [`NaiveDateTime`], taken in the local time zone, as milliseconds
/// since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateTimeSerializer;

impl Serializer for LocalDateTimeSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let naive = value
            .downcast_ref::<NaiveDateTime>()
            .ok_or_else(|| SerializeError::mismatch("a NaiveDateTime", value))?;
        output.write_i64(local_millis(naive))?;
        Ok(())
    }
}

/// Writes a [`NaiveDate`] as the milliseconds since the Unix epoch of its
/// local midnight.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDateSerializer;

impl Serializer for LocalDateSerializer {
    fn write(&self, output: &mut dyn Output, value: &dyn Reflect) -> Result<(), SerializeError> {
        let date = value
            .downcast_ref::<NaiveDate>()
            .ok_or_else(|| SerializeError::mismatch("a NaiveDate", value))?;
        output.write_i64(local_millis(&date.and_time(NaiveTime::MIN)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone, Utc};
    use sift_reflect::Reflect;

    use super::{DateTimeSerializer, LocalDateSerializer, LocalDateTimeSerializer};
    use crate::serializer::Serializer;
    use crate::StringOutput;

    fn write(serializer: &dyn Serializer, value: &dyn Reflect) -> String {
        let mut out = StringOutput::new();
        serializer.write(&mut out, value).unwrap();
        out.into_string()
    }

    #[test]
    fn zoned_date_times() {
        let utc: DateTime<Utc> = Utc.timestamp_millis_opt(1_600_000_000_123).unwrap();
        assert_eq!(write(&DateTimeSerializer, &utc), "1600000000123");

        let fixed: DateTime<FixedOffset> = utc.with_timezone(&FixedOffset::east_opt(3600).unwrap());
        assert_eq!(write(&DateTimeSerializer, &fixed), "1600000000123");
    }

    #[test]
    fn naive_values_use_local_zone() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
        let naive = date.and_hms_opt(3, 4, 5).unwrap();
        let expected = Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap()
            .timestamp_millis();
        assert_eq!(write(&LocalDateTimeSerializer, &naive), expected.to_string());

        let midnight = Local
            .from_local_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
            .earliest()
            .unwrap()
            .timestamp_millis();
        assert_eq!(write(&LocalDateSerializer, &date), midnight.to_string());
    }
}
