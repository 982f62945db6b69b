mod calc;
mod portfolio;
