/*!
# Introductory Tutorial for rowscript

Start `rowscript` with no arguments and it waits for you to type a
program, one row per line. Nothing runs until you type `RUN`.

<pre><code>&nbsp;>>> 1 SAY "Hello World"
&nbsp;>>> 2 END
&nbsp;>>> RUN
&nbsp;Hello World
</code></pre>

The rows you typed stay in memory. Type more rows and `RUN` again to run
the whole program from the top with fresh variables. A row typed with a
number that already exists replaces the earlier one. Type the row number
and press TAB to bring back a row you typed before.

`RUNANDEXIT` runs the program once and then quits. `EXIT` quits without
running anything. Stop a running program with CTRL-C.

A program saved in a file runs with `rowscript filename`.

## Rows

Every row starts with a number, then a command, then its arguments,
separated by spaces. Anything after a `;` that is not inside a quoted
string is a remark.

<pre><code>&nbsp;10 SAY "counting" ; this is a remark
</code></pre>

Execution starts at row 1 and moves to the next number after each row.
Missing numbers are skipped, but be careful with gaps at the end of a
program: once the skipping reaches the largest row number the program
stops, so the last row of a program with gaps may never run. Ending a
program with an `END` row avoids surprises.

## Values

Any argument can be a literal, a variable, or another command whose
result is used in its place.

<pre><code>&nbsp;1 RESERVE N _ NUMBER
&nbsp;2 N IS SUM 2 MULTIPLY 3 4
&nbsp;3 PRINTNUM N
&nbsp;4 END
&nbsp;RUN
&nbsp;14
</code></pre>

There are no loops; combine `IF` with `JUMP` instead.

## Errors

Any error stops the program and names the row it happened in.

<pre><code>&nbsp;1 PRINTNUM DIVIDE 1 0
&nbsp;RUN
&nbsp;DIVISION BY ZERO IN 1
</code></pre>

*/
