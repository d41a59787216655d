use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};

crate::impl_reflect_opaque!(
    DateTime<Utc> => |v, f| f.write_str(&v.to_rfc3339())
);
crate::impl_reflect_opaque!(
    DateTime<Local> => |v, f| f.write_str(&v.to_rfc3339())
);
crate::impl_reflect_opaque!(
    DateTime<FixedOffset> => |v, f| f.write_str(&v.to_rfc3339())
);
crate::impl_reflect_opaque!(NaiveDateTime, NaiveDate, NaiveTime);
