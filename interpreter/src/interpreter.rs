// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{cell::RefCell, rc::Rc};

use log::{debug, error};
use xerith::*;

use crate::{Environment, Output, RuntimeError, RuntimeErrorKind, Value};

pub struct Interpreter<O>
        where O: Output {
    globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    output: O,
}

impl<O> Interpreter<O>
        where O: Output {
    pub fn new(output: O) -> Self {
        let globals = Rc::new(RefCell::new(Environment::new()));

        Self {
            environment: Rc::clone(&globals),
            globals,
            output,
        }
    }

    #[must_use]
    pub fn output(&self) -> &O {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> O {
        self.output
    }

    /// Looks up a variable in the global scope.
    #[must_use]
    pub fn global(&self, name: &str) -> Option<Value> {
        self.globals.borrow().find(name)
    }

    /// Executes the statements in order. The first runtime error is reported,
    /// stops execution and is returned; variables defined before it stay
    /// available for the next call.
    pub fn interpret(&mut self, statements: &[Statement], reporter: &mut dyn Reporter) -> Result<(), RuntimeError> {
        debug!("Interpreting {} statements", statements.len());

        for statement in statements {
            if let Err(e) = self.execute(statement) {
                error!("Runtime error at {}: {e}", e.span);
                reporter.report(e.to_diagnostic());
                return Err(e);
            }
        }

        Ok(())
    }

    pub fn execute(&mut self, statement: &Statement) -> Result<(), RuntimeError> {
        match &statement.kind {
            StatementKind::Block(statements) => {
                let environment = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, environment)
            }

            StatementKind::Expression(expression) => {
                self.evaluate(expression)?;
                Ok(())
            }

            StatementKind::If(statement) => self.execute_if_statement(statement),

            StatementKind::Print(expression) => {
                let value = self.evaluate(expression)?;
                self.output.write_line(&value.to_string());
                Ok(())
            }

            StatementKind::Variable(statement) => {
                let value = match &statement.initializer {
                    Some(initializer) => self.evaluate(initializer)?,
                    None => Value::Nil,
                };

                self.environment.borrow_mut().define(statement.name.lexeme.clone(), value);
                Ok(())
            }

            StatementKind::While(statement) => {
                while self.evaluate(&statement.condition)?.is_truthy() {
                    self.execute(&statement.body)?;
                }

                Ok(())
            }
        }
    }

    /// Runs `statements` inside `environment`. The previous environment is
    /// restored whether or not a statement fails.
    fn execute_block(&mut self, statements: &[Statement], environment: Environment) -> Result<(), RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, Rc::new(RefCell::new(environment)));

        let result = statements.iter().try_for_each(|statement| self.execute(statement));

        self.environment = previous;
        result
    }

    fn execute_if_statement(&mut self, statement: &IfStatement) -> Result<(), RuntimeError> {
        if self.evaluate(&statement.condition)?.is_truthy() {
            return self.execute(&statement.then_branch);
        }

        match &statement.else_branch {
            Some(else_branch) => self.execute(else_branch),
            None => Ok(()),
        }
    }

    pub fn evaluate(&mut self, expression: &Expression) -> Result<Value, RuntimeError> {
        match expression {
            Expression::Assign(expression) => {
                let value = self.evaluate(&expression.value)?;
                let name = &expression.name;

                if self.environment.borrow_mut().overwrite(&name.lexeme, value.clone()) {
                    Ok(value)
                } else {
                    Err(undefined_variable(name))
                }
            }

            Expression::Binary(expression) => self.evaluate_binary_expression(expression),

            Expression::Grouping(expression) => self.evaluate(expression),

            Expression::Literal(token) => evaluate_literal(token),

            Expression::Unary(expression) => self.evaluate_unary_expression(expression),

            Expression::Variable(name) => {
                self.environment.borrow()
                    .find(&name.lexeme)
                    .ok_or_else(|| undefined_variable(name))
            }
        }
    }

    fn evaluate_unary_expression(&mut self, expression: &UnaryExpression) -> Result<Value, RuntimeError> {
        let operand = self.evaluate(&expression.operand)?;

        match *expression.operator.value() {
            UnaryOperator::Not => Ok(Value::Boolean(!operand.is_truthy())),

            UnaryOperator::Negate => match operand {
                Value::Number(number) => Ok(Value::Number(-number)),
                _ => Err(RuntimeError::new(expression.operator.span().clone(), RuntimeErrorKind::UnaryTypeMismatch {
                    operator: expression.operator.as_str(),
                    operand: operand.typ(),
                })),
            },
        }
    }

    fn evaluate_binary_expression(&mut self, expression: &BinaryExpression) -> Result<Value, RuntimeError> {
        let lhs = self.evaluate(&expression.lhs)?;
        let rhs = self.evaluate(&expression.rhs)?;

        match *expression.operator.value() {
            BinaryOperator::Add => match (&lhs, &rhs) {
                (Value::Number(lhs), Value::Number(rhs)) => Ok(Value::Number(lhs + rhs)),
                (Value::Text(lhs), Value::Text(rhs)) => Ok(Value::Text(format!("{lhs}{rhs}"))),
                _ => Err(type_mismatch(expression, "two numbers or two strings", &lhs, &rhs)),
            },

            BinaryOperator::Subtract => evaluate_numeric(expression, &lhs, &rhs, |a, b| Value::Number(a - b)),
            BinaryOperator::Multiply => evaluate_numeric(expression, &lhs, &rhs, |a, b| Value::Number(a * b)),
            BinaryOperator::Divide => evaluate_numeric(expression, &lhs, &rhs, |a, b| Value::Number(a / b)),

            BinaryOperator::Comparison(Comparison::Equality) => Ok(Value::Boolean(lhs.is_equal(&rhs))),
            BinaryOperator::Comparison(Comparison::Inequality) => Ok(Value::Boolean(!lhs.is_equal(&rhs))),

            BinaryOperator::Comparison(comparison) => {
                evaluate_numeric(expression, &lhs, &rhs, |a, b| Value::Boolean(comparison.compare_numbers(a, b)))
            }
        }
    }
}

fn evaluate_literal(token: &Token) -> Result<Value, RuntimeError> {
    match token.kind {
        TokenKind::Number => token.lexeme.parse()
            .map(Value::Number)
            .map_err(|e| RuntimeError::internal(token.span.clone(), format!("invalid number literal `{}`: {e}", token.lexeme))),

        TokenKind::StringLiteral => Ok(Value::Text(token.lexeme.clone())),
        TokenKind::Keyword(Keyword::True) => Ok(Value::Boolean(true)),
        TokenKind::Keyword(Keyword::False) => Ok(Value::Boolean(false)),
        TokenKind::Keyword(Keyword::Nil) => Ok(Value::Nil),

        _ => Err(RuntimeError::internal(token.span.clone(), format!("{token} is not a literal"))),
    }
}

fn evaluate_numeric(expression: &BinaryExpression, lhs: &Value, rhs: &Value, f: impl FnOnce(f64, f64) -> Value) -> Result<Value, RuntimeError> {
    match (lhs, rhs) {
        (Value::Number(lhs), Value::Number(rhs)) => Ok(f(*lhs, *rhs)),
        _ => Err(type_mismatch(expression, "numbers", lhs, rhs)),
    }
}

fn type_mismatch(expression: &BinaryExpression, expected: &'static str, lhs: &Value, rhs: &Value) -> RuntimeError {
    RuntimeError::new(expression.operator.span().clone(), RuntimeErrorKind::TypeMismatch {
        operator: expression.operator.as_str(),
        expected,
        lhs: lhs.typ(),
        rhs: rhs.typ(),
    })
}

fn undefined_variable(name: &Token) -> RuntimeError {
    RuntimeError::new(name.span.clone(), RuntimeErrorKind::UndefinedVariable {
        name: name.lexeme.clone(),
    })
}
