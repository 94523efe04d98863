use super::Formatter;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_ts($f);
        )*
    }};
}

pub(super) trait ToTs {
    fn to_ts(self, f: &mut Formatter<'_>);
}

impl ToTs for &str {
    fn to_ts(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToTs for &String {
    fn to_ts(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}
