#![macro_use]
#![allow(unused_macros)]

#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("You may not enable both `defmt` and `log` features.");

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::trace!($s $(, $x)*);
            #[cfg(feature = "defmt")]
            ::defmt::trace!($s $(, $x)*);
            $(
                #[cfg(not(any(feature = "log", feature = "defmt")))]
                let _ = &$x;
            )*
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::debug!($s $(, $x)*);
            #[cfg(feature = "defmt")]
            ::defmt::debug!($s $(, $x)*);
            $(
                #[cfg(not(any(feature = "log", feature = "defmt")))]
                let _ = &$x;
            )*
        }
    };
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::info!($s $(, $x)*);
            #[cfg(feature = "defmt")]
            ::defmt::info!($s $(, $x)*);
            $(
                #[cfg(not(any(feature = "log", feature = "defmt")))]
                let _ = &$x;
            )*
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::warn!($s $(, $x)*);
            #[cfg(feature = "defmt")]
            ::defmt::warn!($s $(, $x)*);
            $(
                #[cfg(not(any(feature = "log", feature = "defmt")))]
                let _ = &$x;
            )*
        }
    };
}

macro_rules! error {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(feature = "log")]
            ::log::error!($s $(, $x)*);
            #[cfg(feature = "defmt")]
            ::defmt::error!($s $(, $x)*);
            $(
                #[cfg(not(any(feature = "log", feature = "defmt")))]
                let _ = &$x;
            )*
        }
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn arguments_test() {
        let devices = 2_usize;
        let channel = 24_usize;

        trace!("no arguments");
        debug!("chain of {} devices", devices);
        info!("chain of {} devices", devices,);
        warn!("channel {} of {}", channel, devices * 12);
        error!("channel {} of {}", channel, devices * 12,);
    }
}
