quantity!(Kilowatts, suffix: "kW", precision: 0);
